//! Folio - a portfolio you browse in the terminal
//!
//! One scrolling page of sections (about, skills, projects, experience,
//! contact) with a navbar that follows the scroll position.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use folio_core::{content, paths, ActiveSectionTracker, ContactForm, FolioConfig, Portfolio};

mod tui;

use tui::page::{Page, PageView};

/// Folio - terminal portfolio
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A terminal portfolio with scroll-synchronized navigation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Portfolio content file (TOML), overrides the config file
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Theme name, overrides the config file
    #[arg(short, long)]
    theme: Option<String>,

    /// Config file (defaults to ~/.folio/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Jump straight to sections instead of scrolling smoothly
    #[arg(long)]
    no_smooth_scroll: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the portfolio (default)
    View,

    /// Print where each section starts at a given width
    Sections {
        /// Page width in columns
        #[arg(short, long, default_value_t = 80)]
        width: u16,
    },

    /// List available themes
    Themes,

    /// Print the built-in portfolio as a template for your own
    Template,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Log to a file; stdout belongs to the TUI
fn init_logging() {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let writer: Box<dyn Write + Send> = match std::fs::File::create(log_dir.join("folio.log")) {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(std::io::sink()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(writer))
        .with_ansi(false)
        .init();
}

fn load_portfolio(path: Option<&PathBuf>) -> Result<Portfolio> {
    match path {
        Some(path) => Portfolio::load(path)
            .with_context(|| format!("Failed to load portfolio from {}", path.display())),
        None => Portfolio::builtin().context("Built-in portfolio is invalid"),
    }
}

/// Lay the page out without a terminal and print the section rows
fn print_sections(portfolio: &Portfolio, theme: &tui::themes::Theme, width: u16) -> Result<()> {
    let form = ContactForm::new();
    let view = PageView {
        portfolio,
        theme,
        form: &form,
        focus: None,
        tagline: "",
        spinner: "",
        year: chrono::Local::now().year(),
    };
    let page = Page::build(&view, width);

    let config = tui::terminal_tracker_config();
    let mut tracker = ActiveSectionTracker::with_config(config);
    tracker.register_sections(page.tracker_sections())?;

    println!("Sections at width {} ({} rows):", width, page.height());
    for section in tracker.sections() {
        println!(
            "  {:<12} starts at row {:>4}, active from row {:>4}",
            section.id,
            section.top_offset,
            (section.top_offset - config.margin).max(0)
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FolioConfig::load(path)?,
        None => FolioConfig::load_default()?,
    };

    let theme_name = cli
        .theme
        .clone()
        .or(config.theme.clone())
        .unwrap_or_else(|| tui::themes::DEFAULT_THEME.to_string());
    let theme = tui::THEME_REGISTRY.get_or_default(&theme_name);
    tracing::info!("Using theme: {} ({})", theme.display_name, theme.name);

    let content_path = cli.content.as_ref().or(config.content.as_ref());

    match cli.command {
        Some(Commands::Themes) => {
            println!("Available themes ({}):", tui::THEME_REGISTRY.count());
            for (name, theme) in tui::THEME_REGISTRY.list() {
                println!("  {} - {}", name, theme.display_name);
            }
        }
        Some(Commands::Template) => {
            print!("{}", content::BUILTIN_PORTFOLIO);
        }
        Some(Commands::Sections { width }) => {
            let portfolio = load_portfolio(content_path)?;
            print_sections(&portfolio, theme, width)?;
        }
        Some(Commands::View) | None => {
            let portfolio = load_portfolio(content_path)?;
            let smooth_scroll = config.smooth_scroll && !cli.no_smooth_scroll;
            tracing::info!(
                owner = %portfolio.owner.name,
                smooth_scroll,
                "Starting Folio"
            );

            let mut app = tui::App::new(portfolio, theme.clone(), smooth_scroll);
            app.run().await?;
        }
    }

    Ok(())
}

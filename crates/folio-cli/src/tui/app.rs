//! Main application state and event loop

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{ActiveSectionTracker, ContactEvent, ContactForm, Portfolio, TrackerConfig};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    time::{Duration, Instant},
};

use crate::tui::animation::Typewriter;
use crate::tui::components::{Toast, ToastQueue};
use crate::tui::page::Page;
use crate::tui::state::{FormFocus, LayoutCache, LayoutState, ScrollState};
use crate::tui::themes::Theme;

/// Rows scrolled before the navbar turns solid
pub const NAV_THRESHOLD_ROWS: i64 = 2;

/// Rows above a section's start at which it becomes active
pub const NAV_MARGIN_ROWS: i64 = 3;

/// Frame interval while idle (~60fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Faster frames while a smooth scroll is running
const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(8);

/// Tracker settings for a terminal, where offsets are rows instead of pixels
pub fn terminal_tracker_config() -> TrackerConfig {
    TrackerConfig {
        threshold: NAV_THRESHOLD_ROWS,
        margin: NAV_MARGIN_ROWS,
    }
}

/// Application state
pub struct App {
    pub(crate) theme: Theme,
    pub(crate) portfolio: Portfolio,

    // Navigation
    pub(crate) tracker: ActiveSectionTracker,
    pub(crate) scroll: ScrollState,
    pub(crate) layout: LayoutState,
    pub(crate) layout_cache: LayoutCache,
    /// Page laid out on the last frame
    pub(crate) page: Page,
    pub(crate) smooth_scroll: bool,

    // Contact form
    pub(crate) form: ContactForm,
    pub(crate) focus: FormFocus,

    pub(crate) toasts: ToastQueue,

    // Animation
    typewriter: Typewriter,
    started_at: Instant,
    pub(crate) tagline: String,

    pub(crate) should_quit: bool,
    pub(crate) needs_redraw: bool,
}

impl App {
    pub fn new(portfolio: Portfolio, theme: Theme, smooth_scroll: bool) -> Self {
        let typewriter = Typewriter::new(portfolio.owner.taglines.clone());
        Self {
            theme,
            portfolio,
            tracker: ActiveSectionTracker::with_config(terminal_tracker_config()),
            scroll: ScrollState::new(),
            layout: LayoutState::new(),
            layout_cache: LayoutCache::default(),
            page: Page::default(),
            smooth_scroll,
            form: ContactForm::new(),
            focus: FormFocus::default(),
            toasts: ToastQueue::new(),
            typewriter,
            started_at: Instant::now(),
            tagline: String::new(),
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Time since the app started, drives text animations
    pub(crate) fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub(crate) fn show_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
        self.needs_redraw = true;
    }

    /// Advance timers and animations for one frame
    pub(crate) fn tick(&mut self, now: Instant) {
        if let Some(event) = self.form.tick(now) {
            if event == ContactEvent::Sent {
                self.show_toast(Toast::success("Message sent!"));
            }
            self.needs_redraw = true;
        }
        // Spinner on the send button
        if self.form.is_submitting() {
            self.needs_redraw = true;
        }

        if self.scroll.tick_animation() {
            self.notify_scroll();
            self.needs_redraw = true;
        }

        // Expired toasts go away, live ones animate their countdown
        if self.toasts.tick() || !self.toasts.is_empty() {
            self.needs_redraw = true;
        }

        let tagline = self
            .typewriter
            .text_at(now.saturating_duration_since(self.started_at));
        if tagline != self.tagline {
            self.tagline = tagline;
            self.needs_redraw = true;
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        self.tracker.dispose();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            self.tick(Instant::now());

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            let poll_timeout = if self.scroll.is_animating() {
                ANIMATION_FRAME_INTERVAL
            } else {
                FRAME_INTERVAL
            };

            tokio::select! {
                biased; // Prefer events over timeout when both are ready

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind != KeyEventKind::Release => {
                            self.handle_key(key.code, key.modifiers);
                            self.needs_redraw = true;
                        }
                        Some(Ok(Event::Mouse(mouse))) => {
                            self.handle_mouse_event(mouse);
                            self.needs_redraw = true;
                        }
                        Some(Ok(Event::Resize(_, _))) => {
                            self.needs_redraw = true;
                        }
                        Some(Err(e)) => {
                            tracing::warn!("Terminal event error: {}", e);
                        }
                        None => {
                            tracing::info!("Terminal event stream closed");
                            self.should_quit = true;
                        }
                        _ => {}
                    }
                }
                _ = tokio::time::sleep(poll_timeout) => {
                    // Timeout - continue loop for animations
                }
            }

            if self.should_quit {
                tracing::info!("Quitting");
                break;
            }
        }
        Ok(())
    }
}

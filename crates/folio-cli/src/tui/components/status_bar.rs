//! Status bar component - bottom bar with active section, progress, shortcuts

use folio_core::SectionKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

/// Values shown on the left of the status bar
pub struct StatusInfo {
    pub active: Option<SectionKind>,
    /// Scroll progress, 0.0 to 1.0
    pub progress: f64,
    pub more_above: bool,
    pub more_below: bool,
    /// Contact form has keyboard focus
    pub editing: bool,
}

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(f: &mut Frame, area: Rect, theme: &Theme, info: &StatusInfo) {
    let bg = Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color));
    f.render_widget(bg, area);

    let section = info.active.map_or("—", |kind| kind.label());
    // Fixed width percentage so the bar doesn't jitter
    let percent = format!(
        "{:>3}% {}{}",
        (info.progress * 100.0).round() as u8,
        if info.more_above { '↑' } else { ' ' },
        if info.more_below { '↓' } else { ' ' },
    );

    let mut left_spans = vec![
        Span::raw(" "),
        Span::styled("● ", Style::default().fg(theme.accent_color)),
        Span::styled(section, Style::default().fg(theme.text_color)),
        Span::styled(" │ ", Style::default().fg(theme.dim_color)),
        Span::styled(percent.clone(), Style::default().fg(theme.dim_color)),
    ];
    let mut left_width: u16 = 1 + 2 + section.width() as u16 + 3 + percent.width() as u16;

    if info.editing {
        let mode = "EDIT";
        left_width += 3 + mode.width() as u16;
        left_spans.push(Span::styled(" │ ", Style::default().fg(theme.dim_color)));
        left_spans.push(Span::styled(mode, Style::default().fg(theme.warning_color)));
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(left_width), Constraint::Fill(1)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(left_spans)), chunks[0]);

    let available_width = chunks[1].width as usize;
    let commands = build_commands_for_width(available_width, info.editing, theme);
    f.render_widget(
        Paragraph::new(Line::from(commands)).alignment(Alignment::Right),
        chunks[1],
    );
}

/// Build command spans based on available width
/// Highest priority first; items that don't fit are dropped
fn build_commands_for_width<'a>(width: usize, editing: bool, theme: &'a Theme) -> Vec<Span<'a>> {
    const BROWSING: [(&str, &str); 5] = [
        (" q ", "quit "),
        (" 1-6 ", "jump "),
        (" Tab ", "next "),
        (" c ", "contact "),
        (" t ", "top "),
    ];
    const EDITING: [(&str, &str); 4] = [
        (" Esc ", "done "),
        (" Tab ", "field "),
        (" ↵ ", "send "),
        (" ^C ", "quit "),
    ];
    let commands: &[(&str, &str)] = if editing { &EDITING } else { &BROWSING };

    let mut spans = Vec::new();
    let mut used_width = 0;
    for (key, desc) in commands {
        let cmd_width = key.width() + desc.width() + 1;
        if used_width + cmd_width > width {
            continue;
        }
        spans.push(Span::styled(
            *key,
            Style::default().bg(theme.border_color).fg(theme.text_color),
        ));
        spans.push(Span::styled(
            format!(" {desc}"),
            Style::default().fg(theme.dim_color),
        ));
        used_width += cmd_width;
    }
    spans
}

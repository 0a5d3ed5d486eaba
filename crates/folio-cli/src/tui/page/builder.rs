//! Line-building helpers shared by the section renderers

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

/// Left margin for body text
pub const INDENT: usize = 2;

/// Accumulates page lines and tracks the current row
pub struct PageBuilder<'t> {
    lines: Vec<Line<'static>>,
    width: usize,
    pub theme: &'t Theme,
}

impl<'t> PageBuilder<'t> {
    pub fn new(width: u16, theme: &'t Theme) -> Self {
        Self {
            lines: Vec::new(),
            width: (width as usize).max(INDENT + 10),
            theme,
        }
    }

    /// Row the next pushed line will occupy
    pub fn row(&self) -> usize {
        self.lines.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn finish(self) -> Vec<Line<'static>> {
        self.lines
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn blanks(&mut self, count: usize) {
        for _ in 0..count {
            self.blank();
        }
    }

    /// Section title with an accent rule underneath
    pub fn heading(&mut self, title: &str) {
        self.blank();
        let title_style = Style::default()
            .fg(self.theme.title_color)
            .add_modifier(Modifier::BOLD);
        self.push_centered(title, title_style);

        let rule_width = title.width().min(self.width);
        let half = rule_width / 2;
        let rule = Line::from(vec![
            Span::styled(
                "━".repeat(half),
                Style::default().fg(self.theme.accent_color),
            ),
            Span::styled(
                "━".repeat(rule_width - half),
                Style::default().fg(self.theme.secondary_color),
            ),
        ]);
        self.push(rule.centered());
        self.blank();
    }

    /// Smaller heading inside a section
    pub fn subheading(&mut self, title: &str) {
        self.push(Line::from(vec![
            Span::raw(" ".repeat(INDENT)),
            Span::styled(
                title.to_string(),
                Style::default()
                    .fg(self.theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    /// Single line centered in the page width
    pub fn push_centered(&mut self, text: &str, style: Style) {
        let text = truncate(text, self.width);
        self.push(Line::from(Span::styled(text, style)).centered());
    }

    /// Word-wrapped paragraph with a left indent
    pub fn paragraph(&mut self, text: &str, style: Style, indent: usize) {
        let available = self.width.saturating_sub(indent + INDENT).max(10);
        for wrapped in textwrap::wrap(text, available) {
            self.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(wrapped.into_owned(), style),
            ]));
        }
    }

    /// Row(s) of `⟨item⟩` badges, wrapping when the width runs out
    pub fn badges(&mut self, items: &[String], indent: usize) {
        if items.is_empty() {
            return;
        }
        let badge_style = Style::default().fg(self.theme.secondary_color);
        let bracket_style = Style::default().fg(self.theme.dim_color);

        let mut spans = vec![Span::raw(" ".repeat(indent))];
        let mut used = indent;
        for item in items {
            let badge_width = item.width() + 3;
            if used > indent && used + badge_width > self.width {
                self.push(Line::from(std::mem::take(&mut spans)));
                spans.push(Span::raw(" ".repeat(indent)));
                used = indent;
            }
            spans.push(Span::styled("⟨", bracket_style));
            spans.push(Span::styled(item.clone(), badge_style));
            spans.push(Span::styled("⟩ ", bracket_style));
            used += badge_width;
        }
        self.push(Line::from(spans));
    }

    /// `label: value` line
    pub fn field(&mut self, label: &str, value: &str, indent: usize) {
        self.push(Line::from(vec![
            Span::raw(" ".repeat(indent)),
            Span::styled(
                format!("{label}: "),
                Style::default().fg(self.theme.dim_color),
            ),
            Span::styled(value.to_string(), Style::default().fg(self.theme.text_color)),
        ]));
    }
}

/// Truncate to a display width, adding an ellipsis when cut
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer line", 6), "a lon…");
    }

    #[test]
    fn test_paragraph_wraps_with_indent() {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let mut builder = PageBuilder::new(24, theme);
        builder.paragraph("one two three four five six seven", Style::default(), 2);

        let lines = builder.finish();
        assert!(lines.len() > 1);
        for line in &lines {
            let text = text_of(line);
            assert!(text.starts_with("  "));
            assert!(text.width() <= 24);
        }
    }

    #[test]
    fn test_badges_wrap() {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let mut builder = PageBuilder::new(20, theme);
        let items: Vec<String> = ["React", "JavaScript", "Tailwind", "Git"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        builder.badges(&items, 2);

        let lines = builder.finish();
        assert!(lines.len() >= 2);
        let joined: String = lines.iter().map(text_of).collect();
        for item in &items {
            assert!(joined.contains(item.as_str()));
        }
    }

    #[test]
    fn test_row_tracks_pushes() {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let mut builder = PageBuilder::new(80, theme);
        assert_eq!(builder.row(), 0);
        builder.blanks(3);
        builder.heading("Skills");
        assert_eq!(builder.row(), 3 + 4);
    }
}

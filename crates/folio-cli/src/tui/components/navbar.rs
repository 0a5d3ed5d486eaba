//! Navigation bar - top bar with logo, section links, and scroll progress

use folio_core::SectionKind;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

/// Rows the navigation bar occupies (links + progress)
pub const NAVBAR_HEIGHT: u16 = 2;

/// Gap between links
const LINK_GAP: u16 = 2;

/// What the navigation bar shows this frame
pub struct NavbarView<'a> {
    /// Short logo text (owner initials)
    pub logo: &'a str,
    pub active: Option<SectionKind>,
    /// Solid background once the page has scrolled past the threshold
    pub solid: bool,
    /// Scroll progress, 0.0 to 1.0
    pub progress: f64,
}

/// Owner initials for the logo ("Alex Morgan" -> "A M")
pub fn logo_text(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .map(|c| c.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn link_text(index: usize, kind: SectionKind, compact: bool) -> String {
    if compact {
        format!("{}", index + 1)
    } else {
        format!("{} {}", index + 1, kind.label())
    }
}

/// Lay out link rectangles for a row starting at `area`
///
/// Links are right-aligned. When the full labels don't fit next to the logo,
/// only the section numbers are shown.
pub fn layout_links(area: Rect, logo_width: u16) -> (Vec<(SectionKind, Rect)>, bool) {
    let full_width: u16 = SectionKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| link_text(i, *kind, false).width() as u16 + LINK_GAP)
        .sum();
    let compact = full_width + logo_width + 2 > area.width;

    let widths: Vec<u16> = SectionKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| link_text(i, *kind, compact).width() as u16)
        .collect();
    let total: u16 = widths.iter().map(|w| w + LINK_GAP).sum();

    let mut x = area.x + area.width.saturating_sub(total);
    let mut links = Vec::with_capacity(widths.len());
    for (kind, width) in SectionKind::ALL.into_iter().zip(widths) {
        let clipped = width.min((area.x + area.width).saturating_sub(x));
        links.push((kind, Rect::new(x, area.y, clipped, 1)));
        x = x.saturating_add(width + LINK_GAP);
    }
    (links, compact)
}

/// Render the navigation bar
/// Returns the clickable link areas
pub fn render_navbar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    view: &NavbarView<'_>,
) -> Vec<(SectionKind, Rect)> {
    if area.height == 0 {
        return Vec::new();
    }

    let bg = if view.solid {
        theme.nav_solid_bg_color
    } else {
        theme.bg_color
    };
    f.render_widget(Paragraph::new("").style(Style::default().bg(bg)), area);

    let row = Rect::new(area.x, area.y, area.width, 1);

    // Logo: initials alternating between the two accent colors
    let mut logo_spans = vec![Span::raw(" ")];
    for (i, ch) in view.logo.chars().enumerate() {
        let color = if i % 4 == 0 {
            theme.accent_color
        } else {
            theme.secondary_color
        };
        logo_spans.push(Span::styled(
            ch.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }
    let logo_width = view.logo.width() as u16 + 1;
    f.render_widget(Paragraph::new(Line::from(logo_spans)), row);

    let (links, compact) = layout_links(row, logo_width);
    for (i, (kind, rect)) in links.iter().enumerate() {
        let is_active = view.active == Some(*kind);
        let style = if is_active {
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.dim_color)
        };
        f.render_widget(
            Paragraph::new(Span::styled(link_text(i, *kind, compact), style)),
            *rect,
        );

        // Active indicator dot just after the link
        if is_active && rect.right() < area.right() {
            if let Some(cell) = f.buffer_mut().cell_mut((rect.right(), rect.y)) {
                cell.set_char('•').set_fg(theme.secondary_color);
            }
        }
    }

    if area.height > 1 {
        let bar = Rect::new(area.x, area.y + 1, area.width, 1);
        ProgressLine {
            progress: view.progress,
            theme,
        }
        .render(bar, f.buffer_mut());
    }

    links
}

/// Thin scroll progress indicator under the links
struct ProgressLine<'a> {
    progress: f64,
    theme: &'a Theme,
}

impl Widget for ProgressLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let filled = (area.width as f64 * self.progress.clamp(0.0, 1.0)).round() as u16;
        let half = filled / 2;
        for i in 0..area.width {
            if let Some(cell) = buf.cell_mut((area.x + i, area.y)) {
                if i < filled {
                    let color = if i < half {
                        self.theme.accent_color
                    } else {
                        self.theme.secondary_color
                    };
                    cell.set_char('━').set_fg(color);
                } else {
                    cell.set_char('─').set_fg(self.theme.border_color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_logo_initials() {
        assert_eq!(logo_text("Alex Morgan"), "A M");
        assert_eq!(logo_text("  cher "), "C");
        assert_eq!(logo_text(""), "");
    }

    #[test]
    fn test_links_right_aligned_and_disjoint() {
        let area = Rect::new(0, 0, 100, 1);
        let (links, compact) = layout_links(area, 4);
        assert!(!compact);
        assert_eq!(links.len(), SectionKind::ALL.len());
        for pair in links.windows(2) {
            assert!(pair[0].1.right() < pair[1].1.x);
        }
        assert!(links.last().unwrap().1.right() <= area.right());
    }

    #[test]
    fn test_narrow_bar_goes_compact() {
        let (links, compact) = layout_links(Rect::new(0, 0, 30, 1), 4);
        assert!(compact);
        assert!(links.iter().all(|(_, r)| r.width == 1));
    }

    #[test]
    fn test_render_highlights_active_link() {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let mut terminal = Terminal::new(TestBackend::new(100, 2)).unwrap();
        let mut links = Vec::new();
        terminal
            .draw(|f| {
                let area = f.area();
                links = render_navbar(
                    f,
                    area,
                    theme,
                    &NavbarView {
                        logo: "A M",
                        active: Some(SectionKind::Skills),
                        solid: true,
                        progress: 0.5,
                    },
                );
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let (_, skills) = links
            .iter()
            .find(|(k, _)| *k == SectionKind::Skills)
            .unwrap();
        let cell = &buffer[(skills.x, skills.y)];
        assert_eq!(cell.fg, theme.accent_color);
        assert_eq!(buffer[(skills.right(), skills.y)].symbol(), "•");

        // Half the progress row is filled
        assert_eq!(buffer[(10, 1)].symbol(), "━");
        assert_eq!(buffer[(90, 1)].symbol(), "─");
    }
}

//! Layout State - Centralized layout area tracking
//!
//! Owns all cached layout rectangles used for hit testing and rendering.

use folio_core::SectionKind;
use ratatui::layout::{Position, Rect};

/// Cached layout areas for hit testing and rendering
///
/// Updated each frame during rendering, used for mouse event handling.
#[derive(Debug, Default)]
pub struct LayoutState {
    /// Clickable navigation links
    pub nav_links: Vec<(SectionKind, Rect)>,
    /// Scrollable page bounds
    pub page_area: Option<Rect>,
    /// Page scrollbar track area
    pub page_scrollbar_area: Option<Rect>,
    /// Currently dragging the page scrollbar
    pub dragging_scrollbar: bool,
}

impl LayoutState {
    /// Create a new empty layout state
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigation link under the given screen cell
    pub fn nav_link_at(&self, x: u16, y: u16) -> Option<SectionKind> {
        let pos = Position::new(x, y);
        self.nav_links
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(kind, _)| *kind)
    }

    pub fn in_page(&self, x: u16, y: u16) -> bool {
        self.page_area
            .is_some_and(|area| area.contains(Position::new(x, y)))
    }

    pub fn in_scrollbar(&self, x: u16, y: u16) -> bool {
        self.page_scrollbar_area
            .is_some_and(|area| area.contains(Position::new(x, y)))
    }

    /// Page content row under a screen row, given the scroll offset
    pub fn page_row_at(&self, y: u16, offset: usize) -> Option<usize> {
        let area = self.page_area?;
        if y < area.y || y >= area.y + area.height {
            return None;
        }
        Some(offset + (y - area.y) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_link_hit_testing() {
        let mut layout = LayoutState::new();
        layout.nav_links = vec![
            (SectionKind::Home, Rect::new(10, 0, 6, 1)),
            (SectionKind::About, Rect::new(18, 0, 7, 1)),
        ];

        assert_eq!(layout.nav_link_at(10, 0), Some(SectionKind::Home));
        assert_eq!(layout.nav_link_at(20, 0), Some(SectionKind::About));
        assert_eq!(layout.nav_link_at(16, 0), None);
        assert_eq!(layout.nav_link_at(20, 1), None);
    }

    #[test]
    fn test_page_row_mapping() {
        let mut layout = LayoutState::new();
        assert_eq!(layout.page_row_at(5, 0), None);

        layout.page_area = Some(Rect::new(0, 2, 80, 20));
        assert_eq!(layout.page_row_at(2, 10), Some(10));
        assert_eq!(layout.page_row_at(7, 10), Some(15));
        assert_eq!(layout.page_row_at(1, 10), None);
        assert_eq!(layout.page_row_at(22, 10), None);
    }
}

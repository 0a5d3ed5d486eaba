//! Scroll-synchronized navigation
//!
//! - `ActiveSectionTracker` decides which section the navigation highlights
//! - `scroll_progress` feeds the navigation bar's progress indicator

mod tracker;

pub use tracker::{ActiveSectionTracker, Section, TrackerConfig};

/// Fraction of the page scrolled, from 0.0 (top) to 1.0 (bottom)
///
/// Content that fits inside the viewport reports 0.0.
pub fn scroll_progress(scroll_y: i64, content_height: i64, viewport_height: i64) -> f64 {
    let scrollable = content_height.saturating_sub(viewport_height);
    if scrollable <= 0 {
        return 0.0;
    }
    (scroll_y.max(0) as f64 / scrollable as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0, 200, 50), 0.0);
        assert_eq!(scroll_progress(75, 200, 50), 0.5);
        assert_eq!(scroll_progress(150, 200, 50), 1.0);
        assert_eq!(scroll_progress(400, 200, 50), 1.0);
        assert_eq!(scroll_progress(-10, 200, 50), 0.0);
    }

    #[test]
    fn test_scroll_progress_short_page() {
        assert_eq!(scroll_progress(0, 30, 50), 0.0);
        assert_eq!(scroll_progress(10, 50, 50), 0.0);
    }
}

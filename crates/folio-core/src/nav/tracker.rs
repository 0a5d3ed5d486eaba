//! Active section tracking
//!
//! Derives which page section is "current" from the scroll offset, with an
//! optimistic override for navigation clicks that lands before the scroll does.

use std::collections::HashSet;

use crate::constants::nav::{ACTIVATION_MARGIN, SCROLL_THRESHOLD};
use crate::error::NavError;

/// A named, vertically positioned region of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Unique identifier (e.g. "about")
    pub id: String,
    /// Distance from the top of the page to the section's first row
    pub top_offset: i64,
}

impl Section {
    pub fn new(id: impl Into<String>, top_offset: i64) -> Self {
        Self {
            id: id.into(),
            top_offset,
        }
    }
}

/// Tunables for the tracker, in whatever unit the host scrolls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    /// `is_past_threshold()` is true once the offset exceeds this
    pub threshold: i64,
    /// Sections activate this far before their top edge reaches the viewport top
    pub margin: i64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            threshold: SCROLL_THRESHOLD,
            margin: ACTIVATION_MARGIN,
        }
    }
}

/// Tracks the highlighted navigation section for one page view
///
/// All mutation goes through `&mut self`, so calls are applied strictly in
/// the order the host delivers them.
#[derive(Debug, Default)]
pub struct ActiveSectionTracker {
    config: TrackerConfig,
    sections: Vec<Section>,
    scroll_y: i64,
    past_threshold: bool,
    /// Index into `sections`
    active: Option<usize>,
    disposed: bool,
}

impl ActiveSectionTracker {
    /// Create a tracker with the default threshold and margin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker with host-specific threshold and margin
    pub fn with_config(config: TrackerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> TrackerConfig {
        self.config
    }

    /// Replace the registered sections
    ///
    /// Ids must be unique. On error the previous registration is kept.
    /// The active section is re-derived from the last scroll offset.
    pub fn register_sections<I>(&mut self, sections: I) -> Result<(), NavError>
    where
        I: IntoIterator<Item = Section>,
    {
        if self.disposed {
            return Err(NavError::Disposed);
        }

        let sections: Vec<Section> = sections.into_iter().collect();
        let mut seen = HashSet::with_capacity(sections.len());
        for section in &sections {
            if !seen.insert(section.id.as_str()) {
                tracing::warn!(id = %section.id, "Rejected section registration with duplicate id");
                return Err(NavError::DuplicateSection(section.id.clone()));
            }
        }

        tracing::debug!(count = sections.len(), "Registered page sections");
        self.sections = sections;
        self.recompute();
        Ok(())
    }

    /// Handle a scroll notification from the host
    ///
    /// Negative offsets (overscroll bounce) clamp to zero.
    pub fn on_scroll(&mut self, scroll_y: i64) {
        if self.disposed {
            tracing::debug!(scroll_y, "Ignoring scroll on disposed tracker");
            return;
        }
        self.scroll_y = scroll_y.max(0);
        self.recompute();
    }

    /// Optimistically highlight `target_id` ahead of the scroll it triggers
    ///
    /// The next `on_scroll` recomputes from the real position.
    pub fn on_navigate(&mut self, target_id: &str) -> Result<(), NavError> {
        if self.disposed {
            return Err(NavError::Disposed);
        }
        let idx = self
            .position(target_id)
            .ok_or_else(|| NavError::UnknownSection(target_id.to_string()))?;
        self.active = Some(idx);
        Ok(())
    }

    /// Id of the highlighted section, if any
    pub fn active_section(&self) -> Option<&str> {
        self.active
            .and_then(|idx| self.sections.get(idx))
            .map(|s| s.id.as_str())
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past_threshold
    }

    /// Last scroll offset seen (after clamping)
    pub fn scroll_y(&self) -> i64 {
        self.scroll_y
    }

    /// Registered sections in registration order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a registered section by id
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.position(id).map(|idx| &self.sections[idx])
    }

    /// Tear down the tracker; later scrolls are ignored and reads report nothing
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        tracing::debug!("Disposing section tracker");
        self.sections.clear();
        self.active = None;
        self.past_threshold = false;
        self.scroll_y = 0;
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Re-derive threshold flag and active section from `scroll_y`
    fn recompute(&mut self) {
        self.past_threshold = self.scroll_y > self.config.threshold;

        // max_by_key keeps the last maximum, so equal adjusted tops resolve
        // to the later-registered section.
        let margin = self.config.margin;
        let scroll_y = self.scroll_y;
        self.active = self
            .sections
            .iter()
            .enumerate()
            .map(|(idx, s)| (idx, s.top_offset.saturating_sub(margin)))
            .filter(|&(_, adjusted_top)| scroll_y >= adjusted_top)
            .max_by_key(|&(_, adjusted_top)| adjusted_top)
            .map(|(idx, _)| idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio_sections() -> Vec<Section> {
        vec![
            Section::new("about", 500),
            Section::new("skills", 1500),
            Section::new("projects", 2500),
        ]
    }

    fn tracker_with(sections: Vec<Section>) -> ActiveSectionTracker {
        let mut tracker = ActiveSectionTracker::new();
        tracker.register_sections(sections).unwrap();
        tracker
    }

    #[test]
    fn test_picks_last_section_scrolled_past() {
        let mut tracker = tracker_with(portfolio_sections());

        tracker.on_scroll(1450);
        assert_eq!(tracker.active_section(), Some("skills"));

        tracker.on_scroll(2400);
        assert_eq!(tracker.active_section(), Some("projects"));

        tracker.on_scroll(400);
        assert_eq!(tracker.active_section(), Some("about"));
    }

    #[test]
    fn test_none_above_every_section() {
        let mut tracker = tracker_with(portfolio_sections());
        tracker.on_scroll(399);
        assert_eq!(tracker.active_section(), None);
    }

    #[test]
    fn test_registration_order_does_not_matter() {
        let mut sections = portfolio_sections();
        sections.reverse();
        let mut tracker = tracker_with(sections);

        tracker.on_scroll(1450);
        assert_eq!(tracker.active_section(), Some("skills"));
    }

    #[test]
    fn test_threshold_independent_of_sections() {
        let mut tracker = ActiveSectionTracker::new();

        tracker.on_scroll(50);
        assert!(!tracker.is_past_threshold());

        tracker.on_scroll(51);
        assert!(tracker.is_past_threshold());
        assert_eq!(tracker.active_section(), None);
    }

    #[test]
    fn test_scroll_is_idempotent() {
        let mut tracker = tracker_with(portfolio_sections());

        tracker.on_scroll(1600);
        let once = tracker.active_section().map(str::to_owned);
        tracker.on_scroll(1600);
        assert_eq!(tracker.active_section().map(str::to_owned), once);
    }

    #[test]
    fn test_optimistic_override_then_convergence() {
        let mut tracker = tracker_with(vec![
            Section::new("about", 800),
            Section::new("contact", 3000),
        ]);

        tracker.on_scroll(0);
        assert_eq!(tracker.active_section(), None);

        tracker.on_navigate("contact").unwrap();
        assert_eq!(tracker.active_section(), Some("contact"));
        assert_eq!(tracker.scroll_y(), 0);

        tracker.on_scroll(3100);
        assert_eq!(tracker.active_section(), Some("contact"));

        tracker.on_scroll(50);
        assert_eq!(tracker.active_section(), None);
    }

    #[test]
    fn test_navigate_unknown_id_keeps_state() {
        let mut tracker = tracker_with(portfolio_sections());
        tracker.on_scroll(1450);

        let err = tracker.on_navigate("blog").unwrap_err();
        assert_eq!(err, NavError::UnknownSection("blog".to_string()));
        assert_eq!(tracker.active_section(), Some("skills"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut tracker = tracker_with(portfolio_sections());

        let err = tracker
            .register_sections(vec![Section::new("x", 0), Section::new("x", 10)])
            .unwrap_err();
        assert_eq!(err, NavError::DuplicateSection("x".to_string()));
        // Previous registration survives
        assert_eq!(tracker.sections().len(), 3);
        assert!(tracker.section("about").is_some());
    }

    #[test]
    fn test_empty_registration_reports_none() {
        let mut tracker = tracker_with(Vec::new());
        for y in [0, 100, 10_000] {
            tracker.on_scroll(y);
            assert_eq!(tracker.active_section(), None);
        }
    }

    #[test]
    fn test_negative_scroll_clamps_to_zero() {
        let mut tracker = tracker_with(vec![Section::new("hero", 0)]);

        tracker.on_scroll(-40);
        assert_eq!(tracker.scroll_y(), 0);
        assert_eq!(tracker.active_section(), Some("hero"));
        assert!(!tracker.is_past_threshold());
    }

    #[test]
    fn test_equal_adjusted_top_prefers_later_section() {
        let mut tracker = tracker_with(vec![
            Section::new("first", 700),
            Section::new("second", 700),
        ]);
        tracker.on_scroll(700);
        assert_eq!(tracker.active_section(), Some("second"));

        let mut tracker = tracker_with(vec![
            Section::new("second", 700),
            Section::new("first", 700),
        ]);
        tracker.on_scroll(700);
        assert_eq!(tracker.active_section(), Some("first"));
    }

    #[test]
    fn test_reregistration_rederives_from_last_scroll() {
        let mut tracker = tracker_with(portfolio_sections());
        tracker.on_scroll(1450);

        // Layout grew: skills moved down below the viewport
        tracker
            .register_sections(vec![
                Section::new("about", 500),
                Section::new("skills", 1800),
                Section::new("projects", 2800),
            ])
            .unwrap();
        assert_eq!(tracker.active_section(), Some("about"));
    }

    #[test]
    fn test_custom_config() {
        let mut tracker = ActiveSectionTracker::with_config(TrackerConfig {
            threshold: 2,
            margin: 4,
        });
        tracker
            .register_sections(vec![Section::new("home", 0), Section::new("about", 30)])
            .unwrap();

        tracker.on_scroll(26);
        assert_eq!(tracker.active_section(), Some("about"));
        assert!(tracker.is_past_threshold());

        tracker.on_scroll(25);
        assert_eq!(tracker.active_section(), Some("home"));
    }

    #[test]
    fn test_dispose_stops_tracking() {
        let mut tracker = tracker_with(portfolio_sections());
        tracker.on_scroll(1450);

        tracker.dispose();
        assert!(tracker.is_disposed());
        assert_eq!(tracker.active_section(), None);
        assert!(!tracker.is_past_threshold());

        tracker.on_scroll(2600);
        assert_eq!(tracker.active_section(), None);
        assert_eq!(tracker.on_navigate("about"), Err(NavError::Disposed));
        assert_eq!(
            tracker.register_sections(portfolio_sections()),
            Err(NavError::Disposed)
        );
    }
}

//! Scroll State - Page scroll position and smooth-scroll animation
//!
//! This module owns the page's scroll offset and provides:
//! - Line-based scrolling with bounds checking
//! - Eased animation toward a navigation target
//! - Viewport bookkeeping for page up/down

/// Fraction of the remaining distance covered each animation frame
const EASE_FACTOR: f64 = 0.25;

/// Cache for layout calculations to avoid re-registering unchanged sections
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    /// Width used for cached calculation
    pub cached_width: u16,
}

/// Manages scroll state for the page area
#[derive(Debug)]
pub struct ScrollState {
    /// Current scroll offset (0 = top, max = bottom)
    pub offset: usize,
    /// Maximum scroll offset for bounds checking
    pub max_scroll: usize,
    /// Visible rows in the page area
    pub viewport_height: usize,
    /// Line the smooth-scroll animation is heading to
    target: Option<usize>,
    /// Fractional position while animating
    animated_offset: f64,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_scroll: 0,
            viewport_height: 0,
            target: None,
            animated_offset: 0.0,
        }
    }

    // =========================================================================
    // Core Scroll Operations
    // =========================================================================

    /// Scroll up by the given amount; cancels any running animation
    pub fn scroll_up(&mut self, amount: usize) {
        self.cancel_animation();
        self.offset = self.offset.saturating_sub(amount);
    }

    /// Scroll down by the given amount; cancels any running animation
    pub fn scroll_down(&mut self, amount: usize) {
        self.cancel_animation();
        self.offset = self.offset.saturating_add(amount).min(self.max_scroll);
    }

    /// Scroll by one viewport, keeping two rows of context
    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.saturating_sub(2).max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.saturating_sub(2).max(1));
    }

    /// Jump to a specific line
    pub fn scroll_to_line(&mut self, line: usize) {
        self.cancel_animation();
        self.offset = line.min(self.max_scroll);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_to_line(0);
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_to_line(self.max_scroll);
    }

    // =========================================================================
    // Smooth Scrolling
    // =========================================================================

    /// Start an eased scroll toward `line`
    pub fn animate_to_line(&mut self, line: usize) {
        let target = line.min(self.max_scroll);
        if target == self.offset {
            self.target = None;
            return;
        }
        self.animated_offset = self.offset as f64;
        self.target = Some(target);
    }

    /// Advance the animation one frame; returns true if the offset moved
    pub fn tick_animation(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let before = self.offset;
        let goal = target as f64;
        let remaining = goal - self.animated_offset;
        // Ease out, but always cover at least one row so every frame moves
        let step = (remaining.abs() * EASE_FACTOR)
            .max(1.0)
            .min(remaining.abs());
        self.animated_offset += step * remaining.signum();

        // Snap once within half a row
        if (goal - self.animated_offset).abs() < 0.5 {
            self.offset = target;
            self.target = None;
        } else {
            self.offset = (self.animated_offset.round() as usize).min(self.max_scroll);
        }
        self.offset != before
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.target = None;
    }

    // =========================================================================
    // Max Scroll Updates
    // =========================================================================

    /// Update bounds from total lines and viewport height
    ///
    /// Returns true if the offset had to be clamped.
    pub fn update_max_scroll(&mut self, total_lines: usize, viewport_height: u16) -> bool {
        self.viewport_height = viewport_height as usize;
        self.max_scroll = total_lines.saturating_sub(self.viewport_height);

        if let Some(target) = self.target {
            self.target = Some(target.min(self.max_scroll));
        }

        if self.offset > self.max_scroll {
            self.offset = self.max_scroll;
            return true;
        }
        false
    }

    /// Check if can scroll up (not at top)
    pub fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    /// Check if can scroll down (not at bottom)
    pub fn can_scroll_down(&self) -> bool {
        self.offset < self.max_scroll
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

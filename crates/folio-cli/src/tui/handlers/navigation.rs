//! Scroll-synchronized navigation
//!
//! Every change to the page offset is reported to the section tracker so
//! the navbar highlight follows the page.

use folio_core::SectionKind;

use crate::tui::app::App;

impl App {
    /// Report the current offset to the tracker
    pub(crate) fn notify_scroll(&mut self) {
        self.tracker.on_scroll(self.scroll.offset as i64);
    }

    /// Section the tracker considers active, Home when none is
    pub(crate) fn current_section(&self) -> SectionKind {
        self.tracker
            .active_section()
            .and_then(SectionKind::from_id)
            .unwrap_or(SectionKind::Home)
    }

    /// Jump to a section: highlight it immediately, then scroll there
    pub(crate) fn navigate_to(&mut self, kind: SectionKind) {
        if let Err(e) = self.tracker.on_navigate(kind.id()) {
            tracing::warn!("Navigation to {} rejected: {}", kind.id(), e);
            return;
        }
        let Some(target) = self.page.section_start(kind) else {
            return;
        };

        tracing::debug!(section = kind.id(), row = target, "Navigating");
        if self.smooth_scroll {
            self.scroll.animate_to_line(target);
        } else {
            self.scroll.scroll_to_line(target);
            self.notify_scroll();
        }
    }

    pub(crate) fn scroll_up(&mut self, amount: usize) {
        self.scroll.scroll_up(amount);
        self.notify_scroll();
    }

    pub(crate) fn scroll_down(&mut self, amount: usize) {
        self.scroll.scroll_down(amount);
        self.notify_scroll();
    }

    /// Move the page to an absolute row
    pub(crate) fn scroll_to(&mut self, line: usize) {
        self.scroll.scroll_to_line(line);
        self.notify_scroll();
    }
}

//! UI rendering coordinator

use chrono::Datelike;
use folio_core::{scroll_progress, SectionKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::tui::animation::spinner_frame;
use crate::tui::app::App;
use crate::tui::components::{
    logo_text, render_navbar, render_page_scrollbar, render_status_bar, render_toasts,
    NavbarView, StatusInfo, NAVBAR_HEIGHT,
};
use crate::tui::page::{Page, PageView};

impl App {
    /// Main UI rendering dispatcher
    pub fn ui(&mut self, f: &mut Frame) {
        let bg = Block::default().style(Style::default().bg(self.theme.bg_color));
        f.render_widget(bg, f.area());

        let [navbar_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(f.area());
        let [page_area, scrollbar_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(1)]).areas(body_area);

        self.layout_page(page_area);

        let active = self.tracker.active_section().and_then(SectionKind::from_id);
        let progress = scroll_progress(
            self.scroll.offset as i64,
            self.page.height() as i64,
            page_area.height as i64,
        );

        let logo = logo_text(&self.portfolio.owner.name);
        self.layout.nav_links = render_navbar(
            f,
            navbar_area,
            &self.theme,
            &NavbarView {
                logo: &logo,
                active,
                solid: self.tracker.is_past_threshold(),
                progress,
            },
        );

        let visible = self
            .page
            .visible(self.scroll.offset, page_area.height as usize)
            .to_vec();
        f.render_widget(
            Paragraph::new(visible).style(Style::default().fg(self.theme.text_color)),
            page_area,
        );

        render_page_scrollbar(
            f,
            scrollbar_area,
            self.scroll.offset,
            self.page.height(),
            page_area.height as usize,
            &self.theme,
        );

        render_status_bar(
            f,
            status_area,
            &self.theme,
            &StatusInfo {
                active,
                progress,
                more_above: self.scroll.can_scroll_up(),
                more_below: self.scroll.can_scroll_down(),
                editing: self.focus.is_focused(),
            },
        );

        render_toasts(f.buffer_mut(), body_area, &self.toasts, &self.theme);

        self.layout.page_area = Some(page_area);
        self.layout.page_scrollbar_area = Some(scrollbar_area);
    }

    /// Rebuild the page for this frame and keep the tracker in step with it
    ///
    /// Sections are re-registered only when the width changes, since that is
    /// the only thing that moves them. Re-registering on every frame would
    /// also wipe an optimistic highlight before its scroll lands.
    pub(crate) fn layout_page(&mut self, page_area: Rect) {
        let spinner = spinner_frame(self.elapsed());
        let year = chrono::Local::now().year();

        let view = PageView {
            portfolio: &self.portfolio,
            theme: &self.theme,
            form: &self.form,
            focus: self.focus.slot,
            tagline: &self.tagline,
            spinner,
            year,
        };
        self.page = Page::build(&view, page_area.width);

        if self.layout_cache.cached_width != page_area.width {
            self.layout_cache.cached_width = page_area.width;
            match self.tracker.register_sections(self.page.tracker_sections()) {
                Ok(()) => {
                    tracing::debug!(width = page_area.width, "Page sections laid out");
                }
                Err(e) => tracing::warn!("Failed to register page sections: {}", e),
            }
        }

        if self.scroll.update_max_scroll(self.page.height(), page_area.height) {
            self.notify_scroll();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tui::app::tests::test_app;
    use folio_core::SectionKind;

    #[test]
    fn test_first_frame_registers_sections() {
        let (app, _terminal) = test_app(100, 30);
        assert_eq!(app.tracker.sections().len(), SectionKind::ALL.len());
        assert_eq!(app.tracker.active_section(), Some("home"));
        assert!(app.scroll.max_scroll > 0);
        assert_eq!(app.layout.nav_links.len(), SectionKind::ALL.len());
    }

    #[test]
    fn test_redraw_keeps_optimistic_highlight() {
        let (mut app, mut terminal) = test_app(100, 30);
        app.smooth_scroll = true;
        app.navigate_to(SectionKind::Contact);

        terminal.draw(|f| app.ui(f)).unwrap();
        assert_eq!(app.current_section(), SectionKind::Contact);
    }

    #[test]
    fn test_resize_reflows_sections() {
        let (mut app, mut terminal) = test_app(100, 30);
        let wide = app.tracker.section("contact").unwrap().top_offset;

        terminal.backend_mut().resize(50, 30);
        terminal.draw(|f| app.ui(f)).unwrap();
        let narrow = app.tracker.section("contact").unwrap().top_offset;
        assert!(narrow > wide);
    }

    #[test]
    fn test_renders_owner_name() {
        let (app, terminal) = test_app(100, 30);
        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains(&app.portfolio.owner.name));
    }
}

//! Page layout
//!
//! Renders every portfolio section into one tall column of lines at a given
//! width and records where each section starts. Those start rows are the
//! section offsets handed to the tracker.

mod builder;
mod sections;

use folio_core::{ContactForm, Portfolio, Section, SectionKind};
use ratatui::text::Line;

use crate::tui::state::FormSlot;
use crate::tui::themes::Theme;

pub use builder::truncate;
use builder::PageBuilder;

/// Everything that feeds one page build
pub struct PageView<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: &'a Theme,
    pub form: &'a ContactForm,
    pub focus: Option<FormSlot>,
    /// Current typewriter text for the hero
    pub tagline: &'a str,
    /// Current spinner frame for the send button
    pub spinner: &'a str,
    /// Year shown in the footer copyright
    pub year: i32,
}

/// A laid-out page
#[derive(Debug, Default)]
pub struct Page {
    pub lines: Vec<Line<'static>>,
    /// First row of each section, in document order
    pub sections: Vec<(SectionKind, usize)>,
    /// Rows occupied by each contact form slot
    pub form_rows: Vec<(FormSlot, usize)>,
    /// First row of the footer
    pub footer_start: usize,
}

impl Page {
    /// Lay out the whole page at `width` columns
    pub fn build(view: &PageView<'_>, width: u16) -> Self {
        let mut builder = PageBuilder::new(width, view.theme);
        let mut page = Page::default();

        for kind in SectionKind::ALL {
            page.sections.push((kind, builder.row()));
            match kind {
                SectionKind::Home => sections::hero(&mut builder, view),
                SectionKind::About => sections::about(&mut builder, view),
                SectionKind::Skills => sections::skills(&mut builder, view),
                SectionKind::Projects => sections::projects(&mut builder, view),
                SectionKind::Experience => sections::experience(&mut builder, view),
                SectionKind::Contact => {
                    page.form_rows = sections::contact(&mut builder, view);
                }
            }
        }

        page.footer_start = builder.row();
        sections::footer(&mut builder, view);

        page.lines = builder.finish();
        page
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Sections in the tracker's terms
    pub fn tracker_sections(&self) -> Vec<Section> {
        self.sections
            .iter()
            .map(|(kind, row)| Section::new(kind.id(), *row as i64))
            .collect()
    }

    pub fn section_start(&self, kind: SectionKind) -> Option<usize> {
        self.sections
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, row)| *row)
    }

    /// Contact form slot drawn on `row`, if any
    pub fn slot_at_row(&self, row: usize) -> Option<FormSlot> {
        self.form_rows
            .iter()
            .find(|(_, r)| *r == row)
            .map(|(slot, _)| *slot)
    }

    /// Lines visible from `offset` for a viewport of `height` rows
    pub fn visible(&self, offset: usize, height: usize) -> &[Line<'static>] {
        let start = offset.min(self.lines.len());
        let end = (offset + height).min(self.lines.len());
        &self.lines[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;
    use folio_core::ContactField;

    fn build_page(form: &ContactForm, focus: Option<FormSlot>, width: u16) -> Page {
        let portfolio = Portfolio::builtin().unwrap();
        let theme = THEME_REGISTRY.get_or_default("folio");
        let view = PageView {
            portfolio: &portfolio,
            theme,
            form,
            focus,
            tagline: "Frontend",
            spinner: "⠋",
            year: 2026,
        };
        Page::build(&view, width)
    }

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_sections_in_document_order() {
        let page = build_page(&ContactForm::new(), None, 80);

        let kinds: Vec<_> = page.sections.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());

        assert_eq!(page.section_start(SectionKind::Home), Some(0));
        let rows: Vec<_> = page.sections.iter().map(|(_, r)| *r).collect();
        assert!(rows.windows(2).all(|w| w[0] < w[1]));
        assert!(page.footer_start > *rows.last().unwrap());
        assert!(page.height() > page.footer_start);
    }

    #[test]
    fn test_section_headings_land_on_start_rows() {
        let page = build_page(&ContactForm::new(), None, 80);
        let about = page.section_start(SectionKind::About).unwrap();

        let heading_area: String = page.lines[about..about + 3].iter().map(text_of).collect();
        assert!(heading_area.contains("About Me"));
    }

    #[test]
    fn test_narrow_width_makes_page_taller() {
        let wide = build_page(&ContactForm::new(), None, 120);
        let narrow = build_page(&ContactForm::new(), None, 40);
        assert!(narrow.height() > wide.height());
        assert!(
            narrow.section_start(SectionKind::Contact) > wide.section_start(SectionKind::Contact)
        );
    }

    #[test]
    fn test_typing_does_not_move_sections() {
        let empty = build_page(&ContactForm::new(), None, 80);

        let mut form = ContactForm::new();
        form.set_value(
            ContactField::Message,
            "line one\nline two\nline three\nfour\nfive\nsix",
        )
        .unwrap();
        let typed = build_page(&form, Some(FormSlot::Field(ContactField::Message)), 80);

        assert_eq!(empty.sections, typed.sections);
        assert!(typed.height() > empty.height());
    }

    #[test]
    fn test_form_rows_resolve_to_slots() {
        let page = build_page(&ContactForm::new(), None, 80);
        for slot in FormSlot::ALL {
            let row = page
                .form_rows
                .iter()
                .find(|(s, _)| *s == slot)
                .map(|(_, r)| *r)
                .unwrap();
            assert_eq!(page.slot_at_row(row), Some(slot));
            assert!(row > page.section_start(SectionKind::Contact).unwrap());
            assert!(row < page.footer_start);
        }
        assert_eq!(page.slot_at_row(0), None);
    }

    #[test]
    fn test_tracker_sections_match_layout() {
        let page = build_page(&ContactForm::new(), None, 80);
        let sections = page.tracker_sections();
        assert_eq!(sections.len(), SectionKind::ALL.len());
        assert_eq!(sections[0], Section::new("home", 0));
        assert_eq!(
            sections[5].top_offset,
            page.section_start(SectionKind::Contact).unwrap() as i64
        );
    }

    #[test]
    fn test_visible_window_clamps() {
        let page = build_page(&ContactForm::new(), None, 80);
        assert_eq!(page.visible(0, 10).len(), 10);
        assert_eq!(page.visible(page.height() - 3, 10).len(), 3);
        assert!(page.visible(page.height() + 5, 10).is_empty());
    }
}

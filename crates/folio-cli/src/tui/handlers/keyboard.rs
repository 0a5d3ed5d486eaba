//! Keyboard event handlers
//!
//! Keys drive the page unless the contact form has focus, in which case
//! printable keys are typed into the focused field.

use crossterm::event::{KeyCode, KeyModifiers};
use folio_core::{ContactError, ContactField, ContactForm, SectionKind};
use std::time::Instant;

use crate::tui::app::App;
use crate::tui::components::Toast;
use crate::tui::state::FormSlot;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // Ctrl+Q / Ctrl+C always quit
        if modifiers.contains(KeyModifiers::CONTROL)
            && matches!(code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        if self.focus.is_focused() {
            self.handle_form_key(code);
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp => {
                self.scroll.page_up();
                self.notify_scroll();
            }
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.scroll.page_down();
                self.notify_scroll();
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll.scroll_to_top();
                self.notify_scroll();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.scroll.scroll_to_end();
                self.notify_scroll();
            }

            // Section jumps
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(kind) = SectionKind::ALL.get(index) {
                    self.navigate_to(*kind);
                }
            }
            KeyCode::Tab => self.navigate_to(self.current_section().next()),
            KeyCode::BackTab => self.navigate_to(self.current_section().prev()),
            KeyCode::Char('t') => self.navigate_to(SectionKind::Home),
            // "Hire Me"
            KeyCode::Char('h') => self.navigate_to(SectionKind::Contact),

            KeyCode::Char('c') => self.focus_form(),
            KeyCode::Enter if self.current_section() == SectionKind::Contact => self.focus_form(),
            _ => {}
        }
    }

    /// Bring the contact form into view and focus its first empty field
    pub(crate) fn focus_form(&mut self) {
        if self.current_section() != SectionKind::Contact {
            self.navigate_to(SectionKind::Contact);
        }
        let slot = ContactField::ALL
            .into_iter()
            .find(|field| self.form.value(*field).is_empty())
            .map_or(FormSlot::SendButton, FormSlot::Field);
        self.focus.focus(slot);
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.focus.blur(),
            KeyCode::Tab | KeyCode::Down => self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus.prev(),
            KeyCode::Enter => match self.focus.slot {
                Some(FormSlot::SendButton) => self.submit_form(),
                Some(FormSlot::Field(field)) if field.is_multiline() => {
                    self.edit_form(|form| form.push_char(field, '\n'));
                }
                Some(FormSlot::Field(_)) => self.focus.next(),
                None => {}
            },
            KeyCode::Backspace => {
                if let Some(field) = self.focus.field() {
                    self.edit_form(|form| form.backspace(field));
                }
            }
            KeyCode::Char(ch) => match self.focus.slot {
                Some(FormSlot::Field(field)) => {
                    self.edit_form(|form| form.push_char(field, ch));
                }
                Some(FormSlot::SendButton) if ch == ' ' => self.submit_form(),
                _ => {}
            },
            _ => {}
        }
    }

    /// Apply an edit; edits while a message is sending are dropped
    fn edit_form(&mut self, edit: impl FnOnce(&mut ContactForm) -> Result<(), ContactError>) {
        if let Err(e) = edit(&mut self.form) {
            tracing::debug!("Form edit ignored: {}", e);
        }
    }

    /// Start sending, or show why the form can't be sent yet
    pub(crate) fn submit_form(&mut self) {
        match self.form.submit(Instant::now()) {
            Ok(()) => self.focus.blur(),
            Err(ContactError::Busy) => {}
            Err(e) => self.show_toast(Toast::error(capitalize(&e.to_string()))),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::test_app;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _terminal) = test_app(100, 30);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let (mut app, _terminal) = test_app(100, 30);
        app.focus.focus(FormSlot::Field(ContactField::Name));
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_number_keys_jump_to_sections() {
        let (mut app, _terminal) = test_app(100, 30);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.current_section(), SectionKind::Skills);

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.current_section(), SectionKind::Skills);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_section(), SectionKind::Projects);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.current_section(), SectionKind::Skills);

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.current_section(), SectionKind::Home);
        assert_eq!(app.scroll.offset, 0);
    }

    #[test]
    fn test_line_scrolling_updates_tracker() {
        let (mut app, _terminal) = test_app(100, 30);
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.scroll.offset, 3);
        assert!(app.tracker.is_past_threshold());

        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.tracker.scroll_y(), 1);
        assert!(!app.tracker.is_past_threshold());
    }

    #[test]
    fn test_typing_into_form() {
        let (mut app, _terminal) = test_app(100, 30);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.focus.field(), Some(ContactField::Name));
        assert_eq!(app.current_section(), SectionKind::Contact);

        // Page keys are typed, not interpreted
        type_text(&mut app, "qj1");
        assert!(!app.should_quit);
        assert_eq!(app.form.value(ContactField::Name), "qj1");

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus.field(), Some(ContactField::Email));
        type_text(&mut app, "sam@example.com");

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Hi");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "there");
        assert_eq!(app.form.value(ContactField::Message), "Hi\nthere");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus.slot, Some(FormSlot::SendButton));
        press(&mut app, KeyCode::Enter);
        assert!(app.form.is_submitting());
        assert!(!app.focus.is_focused());
    }

    #[test]
    fn test_invalid_submit_shows_error_toast() {
        let (mut app, _terminal) = test_app(100, 30);
        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "Sam");

        app.focus.focus(FormSlot::SendButton);
        press(&mut app, KeyCode::Enter);

        assert!(!app.form.is_submitting());
        let messages: Vec<_> = app.toasts.visible().map(|t| t.message.clone()).collect();
        assert_eq!(messages, vec!["Email is required"]);
    }

    #[test]
    fn test_escape_leaves_form() {
        let (mut app, _terminal) = test_app(100, 30);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Esc);
        assert!(!app.focus.is_focused());

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.current_section(), SectionKind::Home);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("invalid email"), "Invalid email");
        assert_eq!(capitalize(""), "");
    }
}

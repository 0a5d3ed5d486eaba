//! Contact form focus
//!
//! Which form slot receives typed keys. `None` means keys drive the page.

use folio_core::ContactField;

/// A focusable slot in the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSlot {
    Field(ContactField),
    SendButton,
}

impl FormSlot {
    pub const ALL: [FormSlot; 4] = [
        FormSlot::Field(ContactField::Name),
        FormSlot::Field(ContactField::Email),
        FormSlot::Field(ContactField::Message),
        FormSlot::SendButton,
    ];

    fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|slot| slot == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Contact form focus state
#[derive(Debug, Default)]
pub struct FormFocus {
    pub slot: Option<FormSlot>,
}

impl FormFocus {
    pub fn is_focused(&self) -> bool {
        self.slot.is_some()
    }

    pub fn focus(&mut self, slot: FormSlot) {
        self.slot = Some(slot);
    }

    pub fn blur(&mut self) {
        self.slot = None;
    }

    pub fn next(&mut self) {
        self.slot = Some(self.slot.map_or(FormSlot::ALL[0], |slot| slot.next()));
    }

    pub fn prev(&mut self) {
        self.slot = Some(self.slot.map_or(FormSlot::SendButton, |slot| slot.prev()));
    }

    /// Focused text field, if the focus is on one
    pub fn field(&self) -> Option<ContactField> {
        match self.slot {
            Some(FormSlot::Field(field)) => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles() {
        let mut focus = FormFocus::default();
        assert!(!focus.is_focused());

        focus.next();
        assert_eq!(focus.field(), Some(ContactField::Name));

        focus.next();
        focus.next();
        focus.next();
        assert_eq!(focus.slot, Some(FormSlot::SendButton));
        assert_eq!(focus.field(), None);

        focus.next();
        assert_eq!(focus.field(), Some(ContactField::Name));

        focus.prev();
        assert_eq!(focus.slot, Some(FormSlot::SendButton));

        focus.blur();
        assert!(!focus.is_focused());
    }
}

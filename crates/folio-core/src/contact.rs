//! Contact form
//!
//! Sending is simulated: the form waits out a fixed delay, reports success,
//! then clears itself. Nothing leaves the process.

use std::time::{Duration, Instant};

use crate::constants::contact::{RESET_DELAY, SEND_DELAY};
use crate::error::ContactError;

/// Editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
    ];

    /// Field name used in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Message => "Your Message",
        }
    }

    /// Whether the field accepts newlines
    pub fn is_multiline(&self) -> bool {
        matches!(self, ContactField::Message)
    }
}

/// Submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting { since: Instant },
    Submitted { since: Instant },
}

/// Transitions reported by `ContactForm::tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEvent {
    /// Simulated send finished
    Sent,
    /// Success state expired and the form was cleared
    Reset,
}

/// Contact form state
#[derive(Debug, Clone)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    state: SubmitState,
    send_delay: Duration,
    reset_delay: Duration,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::with_delays(SEND_DELAY, RESET_DELAY)
    }

    pub fn with_delays(send_delay: Duration, reset_delay: Duration) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            state: SubmitState::Idle,
            send_delay,
            reset_delay,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmitState::Submitting { .. })
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, SubmitState::Submitted { .. })
    }

    /// Fields can only be edited while no submission is in progress
    pub fn is_editable(&self) -> bool {
        self.state == SubmitState::Idle
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Replace a field's value
    pub fn set_value(
        &mut self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Result<(), ContactError> {
        self.ensure_editable()?;
        *self.value_mut(field) = value.into();
        Ok(())
    }

    /// Append a character; newlines are dropped for single-line fields
    pub fn push_char(&mut self, field: ContactField, ch: char) -> Result<(), ContactError> {
        self.ensure_editable()?;
        if ch == '\n' && !field.is_multiline() {
            return Ok(());
        }
        self.value_mut(field).push(ch);
        Ok(())
    }

    /// Remove the last character
    pub fn backspace(&mut self, field: ContactField) -> Result<(), ContactError> {
        self.ensure_editable()?;
        self.value_mut(field).pop();
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), ContactError> {
        if self.is_editable() {
            Ok(())
        } else {
            Err(ContactError::Busy)
        }
    }

    /// Check required fields and email shape
    pub fn validate(&self) -> Result<(), ContactError> {
        for field in ContactField::ALL {
            if self.value(field).trim().is_empty() {
                return Err(ContactError::MissingField(field.label()));
            }
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }

    /// Start the simulated send
    pub fn submit(&mut self, now: Instant) -> Result<(), ContactError> {
        self.ensure_editable()?;
        self.validate()?;
        tracing::info!("Contact form submitted (simulated send)");
        self.state = SubmitState::Submitting { since: now };
        Ok(())
    }

    /// Advance timers; returns the transition that happened, if any
    pub fn tick(&mut self, now: Instant) -> Option<ContactEvent> {
        match self.state {
            SubmitState::Idle => None,
            SubmitState::Submitting { since } => {
                if now.saturating_duration_since(since) < self.send_delay {
                    return None;
                }
                self.state = SubmitState::Submitted {
                    since: since + self.send_delay,
                };
                tracing::debug!("Contact form send completed");
                Some(ContactEvent::Sent)
            }
            SubmitState::Submitted { since } => {
                if now.saturating_duration_since(since) < self.reset_delay {
                    return None;
                }
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.state = SubmitState::Idle;
                tracing::debug!("Contact form reset");
                Some(ContactEvent::Reset)
            }
        }
    }
}

/// `local@domain` with both parts present and no whitespace
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_value(ContactField::Name, "Sam").unwrap();
        form.set_value(ContactField::Email, "sam@example.com").unwrap();
        form.set_value(ContactField::Message, "Hello there").unwrap();
        form
    }

    #[test]
    fn test_requires_every_field() {
        let mut form = ContactForm::new();
        assert_eq!(form.validate(), Err(ContactError::MissingField("Name")));

        form.set_value(ContactField::Name, "Sam").unwrap();
        form.set_value(ContactField::Email, "sam@example.com").unwrap();
        assert_eq!(form.validate(), Err(ContactError::MissingField("Message")));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("sam@example.com"));
        assert!(!is_valid_email("sam"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("sam@"));
        assert!(!is_valid_email("sam@@example.com"));
        assert!(!is_valid_email("sam @example.com"));
    }

    #[test]
    fn test_invalid_email_blocks_submit() {
        let mut form = filled_form();
        form.set_value(ContactField::Email, "nope").unwrap();

        let err = form.submit(Instant::now()).unwrap_err();
        assert_eq!(err, ContactError::InvalidEmail("nope".into()));
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn test_submission_timeline() {
        let mut form = filled_form();
        let start = Instant::now();

        form.submit(start).unwrap();
        assert!(form.is_submitting());

        assert_eq!(form.tick(start + Duration::from_millis(1499)), None);
        assert_eq!(
            form.tick(start + Duration::from_millis(1500)),
            Some(ContactEvent::Sent)
        );
        assert!(form.is_submitted());
        // Fields survive until the reset
        assert_eq!(form.value(ContactField::Name), "Sam");

        assert_eq!(form.tick(start + Duration::from_millis(4499)), None);
        assert_eq!(
            form.tick(start + Duration::from_millis(4500)),
            Some(ContactEvent::Reset)
        );
        assert_eq!(form.state(), SubmitState::Idle);
        for field in ContactField::ALL {
            assert!(form.value(field).is_empty());
        }
    }

    #[test]
    fn test_late_tick_still_steps_once() {
        let mut form = filled_form();
        let start = Instant::now();
        form.submit(start).unwrap();

        // A long stall reports Sent first, then Reset on the next tick
        let late = start + Duration::from_secs(10);
        assert_eq!(form.tick(late), Some(ContactEvent::Sent));
        assert_eq!(form.tick(late), Some(ContactEvent::Reset));
    }

    #[test]
    fn test_edits_refused_while_busy() {
        let mut form = filled_form();
        let start = Instant::now();
        form.submit(start).unwrap();

        assert_eq!(
            form.push_char(ContactField::Name, 'x'),
            Err(ContactError::Busy)
        );
        assert_eq!(
            form.backspace(ContactField::Message),
            Err(ContactError::Busy)
        );
        assert_eq!(form.submit(start), Err(ContactError::Busy));
        assert_eq!(form.value(ContactField::Name), "Sam");
    }

    #[test]
    fn test_typing() {
        let mut form = ContactForm::new();
        for ch in "Hi\nyou".chars() {
            form.push_char(ContactField::Message, ch).unwrap();
            form.push_char(ContactField::Name, ch).unwrap();
        }
        assert_eq!(form.value(ContactField::Message), "Hi\nyou");
        assert_eq!(form.value(ContactField::Name), "Hiyou");

        form.backspace(ContactField::Name).unwrap();
        assert_eq!(form.value(ContactField::Name), "Hiyo");
    }
}

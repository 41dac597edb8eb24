use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};
use thiserror::Error;

pub const SUBJECT_FIELD: &str = "_subject";
/// How long a notice stays on screen before closing itself.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in the {0} field")]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("A message is already being sent")]
    AlreadySubmitting,
    #[error("Message could not be delivered: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Key/value pairs in the order the hosted form endpoint expects them.
    pub fn form_pairs<'a>(&'a self, subject: &'a str) -> [(&'static str, &'a str); 4] {
        [
            (Field::Name.key(), self.name.trim()),
            (Field::Email.key(), self.email.trim()),
            (Field::Message.key(), self.message.trim()),
            (SUBJECT_FIELD, subject),
        ]
    }
}

// Same shape the browser enforces for `type="email"`.
fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !s.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMode {
    Simulated { delay: Duration },
    Remote { endpoint: String, subject: String },
}

impl Default for SubmitMode {
    fn default() -> Self {
        SubmitMode::Simulated {
            delay: Duration::from_millis(1000),
        }
    }
}

impl SubmitMode {
    /// The wait before a simulated submission reports success. `None` for
    /// remote delivery, which finishes when the endpoint answers.
    pub fn simulated_delay(&self) -> Option<Duration> {
        match self {
            SubmitMode::Simulated { delay } => Some(*delay),
            SubmitMode::Remote { .. } => None,
        }
    }
}

/// Maps the form endpoint's HTTP status onto a delivery outcome.
pub fn delivery_outcome(status: u16) -> Result<(), ContactError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContactError::Delivery(format!("status {status}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn sent() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Message sent!".to_string(),
            description: "Thank you for your message. I'll get back to you soon.".to_string(),
        }
    }

    pub fn failed(err: &ContactError) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Message not sent".to_string(),
            description: err.to_string(),
        }
    }
}

/// Holds the notice currently on screen. Each `show` hands out a fresh id so
/// the timer started for an older notice cannot close a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<(u64, Notice)>,
    next_id: u64,
}

impl NoticeSlot {
    pub fn notice(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(_, n)| n)
    }

    pub fn show(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        self.current = Some((self.next_id, notice));
        self.next_id
    }

    /// Closes the notice if `id` is still the one showing.
    pub fn expire(&mut self, id: u64) -> bool {
        match self.current {
            Some((current, _)) if current == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting {
        ticket: u64,
    },
}

/// A validated snapshot handed to whatever delivers the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: u64,
    pub fields: ContactFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    status: FormStatus,
    next_ticket: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, FormStatus::Submitting { .. })
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    pub fn begin_submit(&mut self) -> Result<Submission, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        self.fields.validate()?;

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.status = FormStatus::Submitting { ticket };
        Ok(Submission {
            ticket,
            fields: self.fields.clone(),
        })
    }

    /// Completes the in-flight submission. Yields a notice only for the
    /// ticket currently in flight, so each submission is reported once.
    pub fn finish(&mut self, ticket: u64, outcome: Result<(), ContactError>) -> Option<Notice> {
        if self.status != (FormStatus::Submitting { ticket }) {
            return None;
        }
        self.status = FormStatus::Editing;
        match outcome {
            Ok(()) => {
                self.fields.clear();
                Some(Notice::sent())
            }
            Err(e) => Some(Notice::failed(&e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ada Lovelace".to_string());
        form.set_field(Field::Email, "ada@example.com".to_string());
        form.set_field(Field::Message, "Hello there".to_string());
        form
    }

    #[test]
    fn test_successful_submission_clears_fields() {
        let mut form = filled();
        let submission = form.begin_submit().expect("valid form should submit");
        assert!(form.is_submitting());
        assert_eq!(submission.fields.name, "Ada Lovelace");

        let notice = form.finish(submission.ticket, Ok(()));
        assert_eq!(notice, Some(Notice::sent()));
        assert!(form.fields().is_empty());
        assert_eq!(form.status(), FormStatus::Editing);
    }

    #[test]
    fn test_notice_raised_exactly_once() {
        let mut form = filled();
        let submission = form.begin_submit().unwrap();
        assert!(form.finish(submission.ticket, Ok(())).is_some());
        assert!(form.finish(submission.ticket, Ok(())).is_none());
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut form = filled();
        let first = form.begin_submit().unwrap();
        form.finish(first.ticket, Ok(()));

        let mut form2 = filled();
        let _ = form2.begin_submit().unwrap();
        assert!(form2.finish(first.ticket + 7, Ok(())).is_none());
        assert!(form2.is_submitting());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySubmitting));
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        let s = form.begin_submit().unwrap();
        let notice = form
            .finish(s.ticket, Err(ContactError::Delivery("status 500".to_string())))
            .unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.description.contains("status 500"));
        assert_eq!(form.fields().email, "ada@example.com");
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_missing_fields() {
        let mut form = ContactForm::new();
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(Field::Name))
        );
        form.set_field(Field::Name, "Ada".to_string());
        form.set_field(Field::Email, "ada@example.com".to_string());
        form.set_field(Field::Message, "   ".to_string());
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(Field::Message))
        );
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@b"));
        assert!(looks_like_email("first.last@example.co.uk"));
        assert!(!looks_like_email("nobody"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("a@"));
        assert!(!looks_like_email("a@b@c"));
        assert!(!looks_like_email("a b@c"));

        let mut form = filled();
        form.set_field(Field::Email, "not-an-email".to_string());
        assert_eq!(form.begin_submit(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_form_pairs_include_subject() {
        let form = filled();
        let pairs = form.fields().form_pairs("New portfolio message");
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["name", "email", "message", "_subject"]);
        assert_eq!(pairs[3].1, "New portfolio message");
    }

    #[test]
    fn test_simulated_delay_follows_mode() {
        let quick = SubmitMode::Simulated {
            delay: Duration::from_millis(250),
        };
        assert_eq!(quick.simulated_delay(), Some(Duration::from_millis(250)));

        let remote = SubmitMode::Remote {
            endpoint: "https://formsubmit.co/someone@example.com".to_string(),
            subject: "hi".to_string(),
        };
        assert_eq!(remote.simulated_delay(), None);
    }

    #[test]
    fn test_delivery_outcome_from_status() {
        assert_eq!(delivery_outcome(200), Ok(()));
        assert_eq!(delivery_outcome(204), Ok(()));
        assert_eq!(
            delivery_outcome(302),
            Err(ContactError::Delivery("status 302".to_string()))
        );
        assert_eq!(
            delivery_outcome(500),
            Err(ContactError::Delivery("status 500".to_string()))
        );

        let mut form = filled();
        let s = form.begin_submit().unwrap();
        let notice = form.finish(s.ticket, delivery_outcome(422)).unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.description.contains("status 422"));
        assert_eq!(form.fields().name, "Ada Lovelace");
    }

    #[test]
    fn test_notice_expires_only_if_still_showing() {
        let mut slot = NoticeSlot::default();
        let first = slot.show(Notice::sent());
        let second = slot.show(Notice::failed(&ContactError::InvalidEmail));

        assert!(!slot.expire(first));
        assert_eq!(slot.notice().map(|n| n.kind), Some(NoticeKind::Error));
        assert!(slot.expire(second));
        assert!(slot.notice().is_none());
        assert!(!slot.expire(second));
    }

    #[test]
    fn test_dismissed_notice_ignores_timer() {
        let mut slot = NoticeSlot::default();
        let id = slot.show(Notice::sent());
        slot.dismiss();
        assert!(slot.notice().is_none());
        assert!(!slot.expire(id));
    }

    #[test]
    fn test_default_mode_is_simulated_one_second() {
        assert_eq!(
            SubmitMode::default(),
            SubmitMode::Simulated {
                delay: Duration::from_millis(1000)
            }
        );
    }
}

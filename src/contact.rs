use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long a Success/Error status stays on screen before reverting to Idle.
pub const STATUS_RESET_MS: u64 = 3000;
/// Watchdog for a request that never resolves; forces the Error state.
pub const SEND_TIMEOUT_MS: u64 = 20_000;

pub const NAME_MIN_LEN: usize = 2;
pub const MESSAGE_MIN_LEN: usize = 10;

// The HTML5 input[type=email] pattern
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern should compile")
});

/// A contact-form submission. Fields are already trimmed by the time this
/// struct is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn from_raw(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
        }
    }
}

/// Field-level validation failure; `Display` is the inline message shown
/// under the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please enter your name (at least 2 characters).")]
    NameTooShort,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
    #[error("Please write a message of at least 10 characters.")]
    MessageTooShort,
}

/// One optional error per validated field; `subject` is free text and never
/// validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Local, synchronous validation. A failure here must never reach the
/// network.
pub fn validate(msg: &ContactMessage) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if msg.name.chars().count() < NAME_MIN_LEN {
        errors.name = Some(FieldError::NameTooShort);
    }
    if !EMAIL_RE.is_match(&msg.email) {
        errors.email = Some(FieldError::EmailInvalid);
    }
    if msg.message.chars().count() < MESSAGE_MIN_LEN {
        errors.message = Some(FieldError::MessageTooShort);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// Submission lifecycle for the contact form. Each submission is stamped
/// with a sequence number so late completions, late watchdogs, and late
/// display-window resets from an older submission are discarded instead of
/// clobbering a newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionState {
    status: FormStatus,
    seq: u64,
}

impl SubmissionState {
    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    /// Start a submission. Returns the sequence number to stamp its async
    /// completion with, or `None` while another submission is in flight.
    pub fn begin(&mut self) -> Option<u64> {
        if self.status == FormStatus::Sending {
            return None;
        }
        self.seq += 1;
        self.status = FormStatus::Sending;
        Some(self.seq)
    }

    /// Apply the network outcome of submission `seq`. Stale completions are
    /// ignored.
    pub fn finish(&mut self, seq: u64, ok: bool) -> bool {
        if self.seq != seq || self.status != FormStatus::Sending {
            return false;
        }
        self.status = if ok {
            FormStatus::Success
        } else {
            FormStatus::Error
        };
        true
    }

    /// Watchdog transition for a request that never resolved.
    pub fn expire(&mut self, seq: u64) -> bool {
        if self.seq != seq || self.status != FormStatus::Sending {
            return false;
        }
        self.status = FormStatus::Error;
        true
    }

    /// End of the terminal-status display window; back to Idle. Only applies
    /// to the submission that scheduled it.
    pub fn reset(&mut self, seq: u64) -> bool {
        if self.seq != seq {
            return false;
        }
        match self.status {
            FormStatus::Success | FormStatus::Error => {
                self.status = FormStatus::Idle;
                true
            }
            _ => false,
        }
    }
}

/// Body of a successful `POST /api/contact` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReply {
    pub message: String,
}

/// The endpoint's side effect: log the submission. Email forwarding would
/// hang off this point; for now the log is the record.
#[cfg(feature = "ssr")]
pub async fn record_submission(msg: &ContactMessage) -> ContactReply {
    tracing::info!(
        name = %msg.name,
        email = %msg.email,
        subject = %msg.subject,
        message = %msg.message,
        "received contact form submission"
    );

    // Simulate relay latency the way the real forwarding call would take
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;

    ContactReply {
        message: "Message sent successfully!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_message() -> ContactMessage {
        ContactMessage::from_raw(
            "Sana",
            "sana@example.com",
            "Hello",
            "Hello, this is a test message.",
        )
    }

    #[test]
    fn valid_message_passes() {
        assert_eq!(validate(&valid_message()), Ok(()));
    }

    #[test]
    fn one_char_name_is_rejected() {
        let msg = ContactMessage::from_raw("A", "sana@example.com", "", "A long enough message.");
        let errors = validate(&msg).unwrap_err();
        assert_eq!(errors.name, Some(FieldError::NameTooShort));
        assert_eq!(errors.email, None);
        assert_eq!(errors.message, None);
    }

    #[test]
    fn whitespace_padding_does_not_satisfy_minimums() {
        let msg = ContactMessage::from_raw("  A  ", "sana@example.com", "", "   short   ");
        let errors = validate(&msg).unwrap_err();
        assert_eq!(errors.name, Some(FieldError::NameTooShort));
        assert_eq!(errors.message, Some(FieldError::MessageTooShort));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["", "plain", "a@", "@b.com", "a b@c.com", "a@b c.com"] {
            let msg = ContactMessage::from_raw("Sana", email, "", "A long enough message.");
            let errors = validate(&msg).unwrap_err();
            assert_eq!(errors.email, Some(FieldError::EmailInvalid), "{email:?}");
        }
    }

    #[test]
    fn subject_is_never_validated() {
        let msg = ContactMessage::from_raw("Sana", "sana@example.com", "", "A long enough message.");
        assert_eq!(validate(&msg), Ok(()));
    }

    #[test]
    fn successful_submission_lifecycle() {
        let mut state = SubmissionState::default();
        assert_eq!(state.status(), FormStatus::Idle);

        let seq = state.begin().expect("idle form should accept a submission");
        assert_eq!(state.status(), FormStatus::Sending);
        assert!(state.finish(seq, true));
        assert_eq!(state.status(), FormStatus::Success);
        assert!(state.reset(seq));
        assert_eq!(state.status(), FormStatus::Idle);
    }

    #[test]
    fn failed_submission_lifecycle() {
        let mut state = SubmissionState::default();
        let seq = state.begin().unwrap();
        assert!(state.finish(seq, false));
        assert_eq!(state.status(), FormStatus::Error);
        assert!(state.reset(seq));
        assert_eq!(state.status(), FormStatus::Idle);
    }

    #[test]
    fn begin_is_refused_while_sending() {
        let mut state = SubmissionState::default();
        let seq = state.begin().unwrap();
        assert_eq!(state.begin(), None);
        assert!(state.is_sending());
        state.finish(seq, true);
        state.reset(seq);
        assert!(state.begin().is_some());
    }

    #[test]
    fn watchdog_expires_a_hung_submission() {
        let mut state = SubmissionState::default();
        let seq = state.begin().unwrap();
        assert!(state.expire(seq));
        assert_eq!(state.status(), FormStatus::Error);
        // the late completion is discarded
        assert!(!state.finish(seq, true));
        assert_eq!(state.status(), FormStatus::Error);
    }

    #[test]
    fn stale_events_from_an_old_submission_are_ignored() {
        let mut state = SubmissionState::default();
        let first = state.begin().unwrap();
        state.finish(first, false);
        state.reset(first);

        let second = state.begin().unwrap();
        assert_ne!(first, second);
        // old watchdog and old reset fire after the new submission began
        assert!(!state.expire(first));
        assert!(!state.reset(first));
        assert_eq!(state.status(), FormStatus::Sending);
        assert!(state.finish(second, true));
    }

    #[test]
    fn reset_does_nothing_while_sending() {
        let mut state = SubmissionState::default();
        let seq = state.begin().unwrap();
        assert!(!state.reset(seq));
        assert_eq!(state.status(), FormStatus::Sending);
    }
}

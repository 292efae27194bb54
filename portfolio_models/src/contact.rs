use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of characters a contact message must contain after
/// trimming.
pub const CONTACT_MESSAGE_MIN_CHARS: usize = 10;

/// Raw, untrusted contact form payload.
///
/// Keys absent from the incoming JSON object deserialize to empty strings and
/// are rejected by [`ContactSubmission::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A validated, normalized contact submission as it is persisted in the
/// append log.
///
/// Only ever constructed by [`ContactSubmission::validate`], so all fields
/// are trimmed and have passed the validation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

impl ContactSubmission {
    /// Validates the submission and normalizes it into a [`ContactRecord`]
    /// stamped with `timestamp`.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// 1. all three trimmed fields must be non-empty,
    /// 2. the email must contain both `@` and `.` (deliberately permissive,
    ///    not RFC validation),
    /// 3. the trimmed message must be at least
    ///    [`CONTACT_MESSAGE_MIN_CHARS`] characters long.
    pub fn validate(
        self,
        timestamp: DateTime<Utc>,
    ) -> Result<ContactRecord, ContactValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactValidationError::MissingFields);
        }

        if !email.contains('@') || !email.contains('.') {
            return Err(ContactValidationError::InvalidEmail);
        }

        if message.chars().count() < CONTACT_MESSAGE_MIN_CHARS {
            return Err(ContactValidationError::MessageTooShort);
        }

        Ok(ContactRecord {
            timestamp,
            name: name.into(),
            email: email.into(),
            message: message.into(),
        })
    }
}

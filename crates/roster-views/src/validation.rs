//! Field checks run before any create or update.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use roster_core::StudentPayload;

/// Minimum number of characters in a trimmed name.
pub const NAME_MIN_LEN: usize = 2;

pub(crate) static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

/// The first check a payload failed. The display text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters.")]
    NameTooShort,

    #[error("Enter a valid email address.")]
    InvalidEmail,

    #[error("Gender is required.")]
    GenderRequired,
}

/// Returns true if `email` looks like `local-part@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check name, email and gender in that order, stopping at the first failure.
///
/// The payload is expected to be trimmed already.
pub fn validate_payload(payload: &StudentPayload) -> Result<(), ValidationError> {
    if payload.name.chars().count() < NAME_MIN_LEN {
        return Err(ValidationError::NameTooShort);
    }
    if !is_valid_email(&payload.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if payload.gender.is_empty() {
        return Err(ValidationError::GenderRequired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_payload() {
        let payload = StudentPayload::new("Al", "al+tag@mail.example.org", "Male");
        assert_eq!(validate_payload(&payload), Ok(()));
    }

    #[test]
    fn name_is_checked_first() {
        let payload = StudentPayload::new("A", "nope", "");
        assert_eq!(
            validate_payload(&payload),
            Err(ValidationError::NameTooShort)
        );
    }

    #[test]
    fn email_is_checked_before_gender() {
        let payload = StudentPayload::new("Alice", "alice@example", "");
        assert_eq!(
            validate_payload(&payload),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn gender_is_required() {
        let payload = StudentPayload::new("Alice", "alice@example.com", "");
        assert_eq!(
            validate_payload(&payload),
            Err(ValidationError::GenderRequired)
        );
        assert_eq!(
            ValidationError::GenderRequired.to_string(),
            "Gender is required."
        );
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a.b_c%d+e-f@sub.domain.io"));
        assert!(!is_valid_email("alice@example.c"));
        assert!(!is_valid_email("alice@@example.com"));
        assert!(!is_valid_email(" alice@example.com"));
        assert!(!is_valid_email("alice@exa mple.com"));
    }

    #[test]
    fn name_length_counts_characters() {
        let payload = StudentPayload::new("Zoë", "zoe@example.com", "Female");
        assert!(validate_payload(&payload).is_ok());
        let payload = StudentPayload::new("é", "e@example.com", "Female");
        assert_eq!(
            validate_payload(&payload),
            Err(ValidationError::NameTooShort)
        );
    }
}

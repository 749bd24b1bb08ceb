//! Form field checks shared by the browser forms, the session hook and the server.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A form field failed validation. The message is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct FieldError(String);

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

pub fn email(email: &str) -> Result<(), FieldError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(FieldError::new("Invalid email format"))
    }
}

pub fn password(password: &str) -> Result<(), FieldError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FieldError::new(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}

pub fn required(value: &str, message: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::new(message))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@village.gov.in"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@x."));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("a@b@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_password_length() {
        assert!(password("secret1").is_ok());
        assert!(password("12345").is_err());
        assert_eq!(
            password("abc").unwrap_err().message(),
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn test_required_ignores_whitespace() {
        assert!(required("   ", "Name is required").is_err());
        assert!(required("Alice", "Name is required").is_ok());
    }
}

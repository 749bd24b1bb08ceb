use store::{FieldError, StoreError};
use thiserror::Error;
use tracing::warn;

/// Message shown for any transport failure. Details go to the log.
pub const NETWORK_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// Failure of a session operation. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A form field was missing or malformed; nothing was sent.
    #[error("{0}")]
    Validation(String),
    /// The credential store refused (bad password, duplicate email, ...).
    #[error("{0}")]
    Credential(String),
    #[error("{}", NETWORK_MESSAGE)]
    Network,
    /// The identity `uid` exists but its profile could not be completed.
    #[error("Your account was created, but your profile could not be saved: {reason}")]
    PartialWrite { uid: String, reason: String },
    /// No identity provider is configured for this page.
    #[error("Sign-in is not available right now. Please try again later.")]
    Unavailable,
}

impl SessionError {
    /// Uid left without a profile, if this is a partial write.
    pub fn orphaned_uid(&self) -> Option<&str> {
        match self {
            SessionError::PartialWrite { uid, .. } => Some(uid),
            _ => None,
        }
    }
}

impl From<FieldError> for SessionError {
    fn from(e: FieldError) -> Self {
        SessionError::Validation(e.message().to_string())
    }
}

impl From<StoreError> for SessionError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Rejected(message) => SessionError::Credential(message),
            StoreError::Unreachable(detail) => {
                warn!(%detail, "credential store unreachable");
                SessionError::Network
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_user_messages() {
        let rejected: SessionError = StoreError::Rejected("Invalid email or password".into()).into();
        assert_eq!(rejected.to_string(), "Invalid email or password");

        let network: SessionError = StoreError::Unreachable("connection reset by peer".into()).into();
        assert_eq!(network, SessionError::Network);
        assert!(!network.to_string().contains("connection reset"));
    }

    #[test]
    fn test_orphaned_uid() {
        let err = SessionError::PartialWrite {
            uid: "uid-7".into(),
            reason: "Missing or insufficient permissions".into(),
        };
        assert_eq!(err.orphaned_uid(), Some("uid-7"));
        assert_eq!(SessionError::Network.orphaned_uid(), None);
    }
}

//! # Collaborator contracts: credential and profile stores
//!
//! The session layer never talks to an identity provider directly. It is handed
//! something implementing [`CredentialStore`] (password checks, account creation,
//! session tokens, auth-state notifications) and something implementing
//! [`ProfileStore`] (the `users` document collection).
//!
//! Implementations:
//!
//! | Type | Where |
//! |------|-------|
//! | [`crate::MemoryCredentialStore`] / [`crate::MemoryProfileStore`] | in-process, used by tests and as an offline fallback |
//! | `ui::RemoteCredentialStore` / `ui::RemoteProfileStore` | browser side, backed by the `api` server functions |

use std::future::Future;

use thiserror::Error;

use crate::feed::SessionSubscription;
use crate::models::{Identity, ProfileRecord};

/// Name of the document collection holding profiles.
pub const USERS_COLLECTION: &str = "users";

/// Failure reported by a credential or profile store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store answered and said no. The message is meant for the user.
    #[error("{0}")]
    Rejected(String),
    /// The store could not be reached.
    #[error("store unreachable: {0}")]
    Unreachable(String),
}

/// Identity provider surface consumed by the session hook.
pub trait CredentialStore {
    fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Identity, StoreError>>;

    fn create_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Identity, StoreError>>;

    fn set_display_name(
        &self,
        uid: &str,
        display_name: &str,
    ) -> impl Future<Output = Result<Identity, StoreError>>;

    fn end_session(&self) -> impl Future<Output = Result<(), StoreError>>;

    fn request_password_reset(&self, email: &str) -> impl Future<Output = Result<(), StoreError>>;

    /// Start receiving auth-state notifications.
    fn subscribe(&self) -> SessionSubscription;
}

/// Document store holding [`ProfileRecord`]s under [`USERS_COLLECTION`], keyed by uid.
pub trait ProfileStore {
    fn write_profile(&self, profile: &ProfileRecord)
        -> impl Future<Output = Result<(), StoreError>>;

    fn read_profile(
        &self,
        uid: &str,
    ) -> impl Future<Output = Result<Option<ProfileRecord>, StoreError>>;
}

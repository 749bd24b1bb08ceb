//! Credential and profile stores backed by the `api` server functions.
//!
//! The browser never sees passwords again after sending them: the server keeps
//! the Argon2 hashes and binds the cookie session to a uid. This side only keeps
//! the [`SessionFeed`] the session hook subscribes to.

use std::time::Duration;

use api::Verdict;
use dioxus::prelude::ServerFnError;
use store::{
    CredentialStore, Identity, ProfileRecord, ProfileStore, SessionFeed, SessionSubscription,
    StoreError,
};
use tracing::{debug, info, warn};

/// How often the server session is re-checked.
pub const EXPIRY_CHECK_INTERVAL: Duration = Duration::from_secs(30);

fn settle<T>(response: Result<Verdict<T>, ServerFnError>) -> Result<T, StoreError> {
    match response {
        Ok(Verdict::Accepted(value)) => Ok(value),
        Ok(Verdict::Rejected(reason)) => Err(StoreError::Rejected(reason)),
        Err(e) => Err(StoreError::Unreachable(e.to_string())),
    }
}

/// What an expiry check should publish, given the signed-in user and the server's
/// answer. `None` means leave the feed alone.
fn expiry_notice(
    current: &Identity,
    response: Result<Option<Identity>, ServerFnError>,
) -> Option<Option<Identity>> {
    match response {
        Ok(None) => {
            info!(uid = %current.uid, "server session ended");
            Some(None)
        }
        Ok(Some(identity)) if identity != *current => Some(Some(identity)),
        Ok(Some(_)) => None,
        Err(e) => {
            debug!(error = %e, "session check failed; will retry");
            None
        }
    }
}

#[derive(Clone, Debug)]
pub struct RemoteCredentialStore {
    feed: SessionFeed,
}

impl Default for RemoteCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteCredentialStore {
    /// Store whose state is unknown until [`restore`](Self::restore) answers.
    pub fn new() -> Self {
        Self {
            feed: SessionFeed::pending(),
        }
    }

    /// Ask the server who the cookie session belongs to and publish the answer.
    /// An unreachable server counts as "nobody".
    pub async fn restore(&self) {
        match api::current_identity().await {
            Ok(identity) => {
                debug!(signed_in = identity.is_some(), "session restored");
                self.feed.publish(identity);
            }
            Err(e) => {
                warn!(error = %e, "could not restore session");
                self.feed.publish(None);
            }
        }
    }

    /// Poll the server session forever, publishing "no user" once it has expired
    /// or was ended elsewhere.
    pub async fn watch_expiry(&self) {
        loop {
            crate::sleep(EXPIRY_CHECK_INTERVAL).await;

            // Nothing can expire while nobody is signed in.
            let Some(current) = self.feed.current_user() else {
                continue;
            };
            if let Some(notice) = expiry_notice(&current, api::current_identity().await) {
                self.feed.publish(notice);
            }
        }
    }
}

impl CredentialStore for RemoteCredentialStore {
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<Identity, StoreError> {
        let identity = settle(api::sign_in(email.to_string(), password.to_string()).await)?;
        self.feed.publish(Some(identity.clone()));
        Ok(identity)
    }

    async fn create_credentials(&self, email: &str, password: &str) -> Result<Identity, StoreError> {
        let identity = settle(api::sign_up(email.to_string(), password.to_string()).await)?;
        self.feed.publish(Some(identity.clone()));
        Ok(identity)
    }

    async fn set_display_name(&self, uid: &str, display_name: &str) -> Result<Identity, StoreError> {
        let identity =
            settle(api::set_display_name(uid.to_string(), display_name.to_string()).await)?;
        if self.feed.current_user().is_some_and(|u| u.uid == identity.uid) {
            self.feed.publish(Some(identity.clone()));
        }
        Ok(identity)
    }

    async fn end_session(&self) -> Result<(), StoreError> {
        api::sign_out()
            .await
            .map_err(|e| StoreError::Unreachable(e.to_string()))?;
        if self.feed.current_user().is_some() {
            self.feed.publish(None);
        }
        Ok(())
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), StoreError> {
        settle(api::request_password_reset(email.to_string()).await)
    }

    fn subscribe(&self) -> SessionSubscription {
        self.feed.subscribe()
    }
}

/// The `users` collection, read and written through the profile server functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct RemoteProfileStore;

impl ProfileStore for RemoteProfileStore {
    async fn write_profile(&self, profile: &ProfileRecord) -> Result<(), StoreError> {
        settle(api::write_profile(profile.clone()).await)
    }

    async fn read_profile(&self, uid: &str) -> Result<Option<ProfileRecord>, StoreError> {
        settle(api::read_profile(uid.to_string()).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_separates_refusals_from_transport_errors() {
        assert_eq!(settle(Ok(Verdict::Accepted(3))), Ok(3));
        assert_eq!(
            settle::<()>(Ok(Verdict::Rejected("Invalid email or password".into()))),
            Err(StoreError::Rejected("Invalid email or password".into()))
        );
        assert!(matches!(
            settle::<()>(Err(ServerFnError::new("connection refused"))),
            Err(StoreError::Unreachable(_))
        ));
    }

    #[test]
    fn test_expiry_check_publishes_only_changes() {
        let alice = Identity::new("uid-1", "a@x.com");
        assert_eq!(expiry_notice(&alice, Ok(None)), Some(None));
        assert_eq!(expiry_notice(&alice, Ok(Some(alice.clone()))), None);

        let mut renamed = alice.clone();
        renamed.display_name = Some("Alice".into());
        assert_eq!(
            expiry_notice(&alice, Ok(Some(renamed.clone()))),
            Some(Some(renamed))
        );

        // A failed check keeps the user signed in until the server answers.
        assert_eq!(
            expiry_notice(&alice, Err(ServerFnError::new("connection refused"))),
            None
        );
    }
}

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::feed::{SessionFeed, SessionSubscription};
use crate::models::{Identity, ProfileRecord};
use crate::provider::{CredentialStore, ProfileStore, StoreError};
use crate::validate;

#[derive(Clone, Debug)]
struct Account {
    identity: Identity,
    password: String,
}

/// In-memory CredentialStore for testing and as an offline fallback.
///
/// Keeps a single "current session", like one browser tab signed in to a hosted
/// identity provider. Passwords are held as given; nothing here is persisted.
#[derive(Clone, Debug)]
pub struct MemoryCredentialStore {
    accounts: Arc<Mutex<HashMap<String, Account>>>,
    feed: SessionFeed,
    resets: Arc<Mutex<Vec<String>>>,
    offline: Arc<AtomicBool>,
    next_uid: Arc<AtomicU64>,
}

impl Default for MemoryCredentialStore {
    fn default() -> Self {
        Self {
            accounts: Arc::default(),
            feed: SessionFeed::new(None),
            resets: Arc::default(),
            offline: Arc::default(),
            next_uid: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account without signing it in.
    pub fn with_account(self, email: &str, password: &str, display_name: Option<&str>) -> Self {
        let mut identity = Identity::new(self.allocate_uid(), email.to_lowercase());
        identity.display_name = display_name.map(str::to_string);
        self.accounts.lock().unwrap().insert(
            email.to_lowercase(),
            Account {
                identity,
                password: password.to_string(),
            },
        );
        self
    }

    /// Simulate the provider being unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Simulate the provider revoking the current session (token expiry, sign-out elsewhere).
    pub fn expire_session(&self) {
        if self.feed.current_user().is_some() {
            self.feed.publish(None);
        }
    }

    pub fn current_user(&self) -> Option<Identity> {
        self.feed.current_user()
    }

    pub fn account(&self, email: &str) -> Option<Identity> {
        self.accounts
            .lock()
            .unwrap()
            .get(&email.to_lowercase())
            .map(|a| a.identity.clone())
    }

    /// Live auth-state subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.feed.subscriber_count()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    /// Addresses a password reset was requested for, oldest first.
    pub fn reset_requests(&self) -> Vec<String> {
        self.resets.lock().unwrap().clone()
    }

    fn allocate_uid(&self) -> String {
        format!("uid-{}", self.next_uid.fetch_add(1, Ordering::SeqCst))
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError::Unreachable("memory store is offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<Identity, StoreError> {
        self.check_online()?;
        let identity = {
            let accounts = self.accounts.lock().unwrap();
            match accounts.get(&email.trim().to_lowercase()) {
                Some(account) if account.password == password => account.identity.clone(),
                _ => return Err(StoreError::Rejected("Invalid email or password".to_string())),
            }
        };
        self.feed.publish(Some(identity.clone()));
        Ok(identity)
    }

    async fn create_credentials(&self, email: &str, password: &str) -> Result<Identity, StoreError> {
        self.check_online()?;
        let email = email.trim().to_lowercase();
        validate::email(&email).map_err(|e| StoreError::Rejected(e.to_string()))?;
        validate::password(password).map_err(|e| StoreError::Rejected(e.to_string()))?;

        let identity = {
            let mut accounts = self.accounts.lock().unwrap();
            if accounts.contains_key(&email) {
                return Err(StoreError::Rejected(
                    "An account with this email already exists".to_string(),
                ));
            }
            let identity = Identity::new(self.allocate_uid(), email.clone());
            accounts.insert(
                email,
                Account {
                    identity: identity.clone(),
                    password: password.to_string(),
                },
            );
            identity
        };
        self.feed.publish(Some(identity.clone()));
        Ok(identity)
    }

    async fn set_display_name(&self, uid: &str, display_name: &str) -> Result<Identity, StoreError> {
        self.check_online()?;
        let updated = {
            let mut accounts = self.accounts.lock().unwrap();
            let account = accounts
                .values_mut()
                .find(|a| a.identity.uid == uid)
                .ok_or_else(|| StoreError::Rejected("No account for this user".to_string()))?;
            account.identity.display_name = Some(display_name.to_string());
            account.identity.clone()
        };
        // Re-announce the active user so observers see the new name.
        if self.feed.current_user().is_some_and(|u| u.uid == uid) {
            self.feed.publish(Some(updated.clone()));
        }
        Ok(updated)
    }

    async fn end_session(&self) -> Result<(), StoreError> {
        self.check_online()?;
        if self.feed.current_user().is_some() {
            self.feed.publish(None);
        }
        Ok(())
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), StoreError> {
        self.check_online()?;
        let email = email.trim().to_lowercase();
        if !self.accounts.lock().unwrap().contains_key(&email) {
            return Err(StoreError::Rejected(
                "No account found with this email".to_string(),
            ));
        }
        self.resets.lock().unwrap().push(email);
        Ok(())
    }

    fn subscribe(&self) -> SessionSubscription {
        self.feed.subscribe()
    }
}

/// In-memory ProfileStore for testing and as an offline fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryProfileStore {
    documents: Arc<Mutex<HashMap<String, ProfileRecord>>>,
    fail_writes: Arc<AtomicBool>,
    offline: Arc<AtomicBool>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write fail, leaving reads working.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn get(&self, uid: &str) -> Option<ProfileRecord> {
        self.documents.lock().unwrap().get(uid).cloned()
    }

    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProfileStore for MemoryProfileStore {
    async fn write_profile(&self, profile: &ProfileRecord) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unreachable("memory store is offline".to_string()));
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected("Missing or insufficient permissions".to_string()));
        }
        self.documents
            .lock()
            .unwrap()
            .insert(profile.uid.clone(), profile.clone());
        Ok(())
    }

    async fn read_profile(&self, uid: &str) -> Result<Option<ProfileRecord>, StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unreachable("memory store is offline".to_string()));
        }
        Ok(self.get(uid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_create_and_verify_credentials() {
        let store = MemoryCredentialStore::new();

        let created = store.create_credentials("A@X.com", "secret1").await.unwrap();
        assert_eq!(created.email, "a@x.com");
        assert_eq!(store.current_user(), Some(created.clone()));

        store.end_session().await.unwrap();
        assert!(store.current_user().is_none());

        let signed_in = store.verify_credentials("a@x.com", "secret1").await.unwrap();
        assert_eq!(signed_in.uid, created.uid);
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected_without_signing_in() {
        let store = MemoryCredentialStore::new().with_account("a@x.com", "secret1", None);
        let err = store.verify_credentials("a@x.com", "wrong").await.unwrap_err();
        assert_eq!(err, StoreError::Rejected("Invalid email or password".to_string()));
        assert!(store.current_user().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_case_insensitive() {
        let store = MemoryCredentialStore::new().with_account("a@x.com", "secret1", None);
        let err = store.create_credentials("A@x.COM", "another1").await.unwrap_err();
        assert!(matches!(err, StoreError::Rejected(_)));
        assert_eq!(store.account_count(), 1);
    }

    #[tokio::test]
    async fn test_end_session_when_anonymous_publishes_nothing() {
        let store = MemoryCredentialStore::new();
        let mut sub = store.subscribe();
        assert_eq!(sub.try_next(), Some(None));

        store.end_session().await.unwrap();
        assert!(sub.try_next().is_none());
    }

    #[tokio::test]
    async fn test_display_name_is_republished_for_active_user() {
        let store = MemoryCredentialStore::new();
        let created = store.create_credentials("a@x.com", "secret1").await.unwrap();
        let mut sub = store.subscribe();
        assert_eq!(sub.try_next(), Some(Some(created.clone())));

        store.set_display_name(&created.uid, "Alice").await.unwrap();
        let renamed = sub.try_next().flatten().unwrap();
        assert_eq!(renamed.display_name(), "Alice");
    }

    #[tokio::test]
    async fn test_password_reset_requires_known_account() {
        let store = MemoryCredentialStore::new().with_account("a@x.com", "secret1", None);
        store.request_password_reset("a@x.com").await.unwrap();
        assert!(store.request_password_reset("b@x.com").await.is_err());
        assert_eq!(store.reset_requests(), vec!["a@x.com".to_string()]);
    }

    #[tokio::test]
    async fn test_offline_store_is_unreachable() {
        let store = MemoryCredentialStore::new().with_account("a@x.com", "secret1", None);
        store.set_offline(true);
        let err = store.verify_credentials("a@x.com", "secret1").await.unwrap_err();
        assert!(matches!(err, StoreError::Unreachable(_)));
    }

    #[tokio::test]
    async fn test_profile_write_and_read() {
        let profiles = MemoryProfileStore::new();
        let identity = Identity::new("uid-1", "a@x.com");
        let record = ProfileRecord::new_user(&identity, "Alice", None, Utc::now());

        profiles.write_profile(&record).await.unwrap();
        assert_eq!(profiles.read_profile("uid-1").await.unwrap(), Some(record));
        assert_eq!(profiles.read_profile("uid-2").await.unwrap(), None);

        profiles.set_fail_writes(true);
        let other = ProfileRecord::new_user(&Identity::new("uid-2", "b@x.com"), "Bob", None, Utc::now());
        assert!(profiles.write_profile(&other).await.is_err());
        assert_eq!(profiles.len(), 1);
    }
}

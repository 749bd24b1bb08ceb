//! # Directory: the server's in-memory accounts, profiles, events and messages
//!
//! Everything lives in one `Arc<Mutex<..>>` and is lost on restart. The process
//! shares a single instance through [`Directory::shared`], seeded from the site
//! configuration on first use; tests build their own with [`Directory::seeded`].
//!
//! | Collection | Key | Written by |
//! |------------|-----|------------|
//! | accounts | lowercased email | sign-up server function, `POST /api/auth/register`, admin seed |
//! | profiles (`users`) | uid | profile server function, `POST /api/auth/register`, admin seed |
//! | events | auto-increment id | `POST /api/events`, `create_event` server function, sample seed |
//! | messages | auto-increment id | `POST /api/contact`, `submit_contact` server function |

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use chrono::Utc;
use store::{
    validate, ContactMessage, Event, Identity, NewContactMessage, NewEvent, ProfileRecord, Role,
    SiteConfig,
};
use tracing::{error, info};

use crate::auth::{hash_password, verify_password};
use crate::error::ApiError;
use crate::models::{StoredAccount, UserInfo};

#[derive(Debug, Default)]
struct DirectoryState {
    accounts: HashMap<String, StoredAccount>,
    profiles: HashMap<String, ProfileRecord>,
    events: Vec<Event>,
    messages: Vec<ContactMessage>,
    resets: Vec<String>,
}

impl DirectoryState {
    fn account_by_uid(&self, uid: &str) -> Option<&StoredAccount> {
        self.accounts.values().find(|a| a.identity.uid == uid)
    }
}

/// Registration form as posted to `/api/auth/register`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Clone, Debug)]
pub struct Directory {
    state: Arc<Mutex<DirectoryState>>,
    config: Arc<SiteConfig>,
}

static SHARED: OnceLock<Directory> = OnceLock::new();

impl Directory {
    /// The process-wide directory, seeded from [`crate::settings::load`] on first use.
    pub fn shared() -> &'static Directory {
        SHARED.get_or_init(|| Directory::seeded(crate::settings::load()))
    }

    /// Empty directory carrying `config`, with sample events and the admin seed applied.
    /// A seed entry that fails validation is logged and left out; the config is kept.
    pub fn seeded(config: SiteConfig) -> Self {
        let directory = Self {
            state: Arc::default(),
            config: Arc::new(config),
        };

        if directory.config.content.seed_sample_events {
            for (date, title, description, location) in SAMPLE_EVENTS {
                let event = NewEvent {
                    title: title.to_string(),
                    date: date.to_string(),
                    description: description.to_string(),
                    location: location.to_string(),
                };
                if let Err(e) = directory.add_event(event) {
                    error!(error = %e, title, "sample event not seeded");
                }
            }
        }

        match directory.seed_admin() {
            Ok(Some(identity)) => info!(email = %identity.email, "admin account seeded"),
            Ok(None) => {}
            Err(e) => error!(error = %e, "admin account not seeded"),
        }
        directory
    }

    /// Create the configured `[admin]` account with an admin profile, if one is configured.
    fn seed_admin(&self) -> Result<Option<Identity>, ApiError> {
        let Some(admin) = self.config.admin.clone() else {
            return Ok(None);
        };
        let identity = self.create_account(&admin.email, &admin.password, Some(&admin.name))?;
        let mut profile = ProfileRecord::new_user(&identity, &admin.name, None, Utc::now());
        profile.role = Role::Admin;
        self.put_profile(profile);
        Ok(Some(identity))
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Create credentials. Checks run in the order the register form reports them:
    /// email format, duplicate, password length.
    pub fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<Identity, ApiError> {
        let email = email.trim().to_lowercase();
        validate::email(&email)?;
        if self.state.lock().unwrap().accounts.contains_key(&email) {
            return Err(ApiError::Duplicate(
                "User with this email already exists".to_string(),
            ));
        }
        validate::password(password)?;

        let password_hash = hash_password(password)?;
        let mut identity = Identity::new(uuid::Uuid::new_v4().to_string(), email.clone());
        identity.display_name = display_name.map(str::to_string);

        let mut state = self.state.lock().unwrap();
        // Checked again: hashing ran without the lock.
        if state.accounts.contains_key(&email) {
            return Err(ApiError::Duplicate(
                "User with this email already exists".to_string(),
            ));
        }
        state.accounts.insert(
            email,
            StoredAccount {
                identity: identity.clone(),
                password_hash,
                created_at: Utc::now(),
            },
        );
        Ok(identity)
    }

    /// Full REST registration: credentials plus a `user` profile in one step.
    pub fn register(&self, form: Registration) -> Result<UserInfo, ApiError> {
        if [&form.name, &form.email, &form.password, &form.phone]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            return Err(ApiError::Validation("All fields are required".to_string()));
        }
        let name = form.name.trim();
        let identity = self.create_account(&form.email, &form.password, Some(name))?;
        let profile = ProfileRecord::new_user(&identity, name, Some(&form.phone), Utc::now());
        self.put_profile(profile.clone());
        info!(uid = %identity.uid, "resident registered");
        Ok(UserInfo::from(&profile))
    }

    pub fn authenticate(&self, email: &str, password: &str) -> Result<Identity, ApiError> {
        let account = self
            .state
            .lock()
            .unwrap()
            .accounts
            .get(&email.trim().to_lowercase())
            .cloned()
            .ok_or(ApiError::InvalidCredentials)?;
        if verify_password(password, &account.password_hash)? {
            Ok(account.identity)
        } else {
            Err(ApiError::InvalidCredentials)
        }
    }

    pub fn identity(&self, uid: &str) -> Option<Identity> {
        self.state
            .lock()
            .unwrap()
            .account_by_uid(uid)
            .map(|a| a.identity.clone())
    }

    pub fn user_info(&self, uid: &str) -> Option<UserInfo> {
        let state = self.state.lock().unwrap();
        state
            .account_by_uid(uid)
            .map(|a| a.to_info(state.profiles.get(uid)))
    }

    pub fn set_display_name(&self, uid: &str, display_name: &str) -> Result<Identity, ApiError> {
        validate::required(display_name, "Name is required")?;
        let mut state = self.state.lock().unwrap();
        let account = state
            .accounts
            .values_mut()
            .find(|a| a.identity.uid == uid)
            .ok_or(ApiError::NotAuthenticated)?;
        account.identity.display_name = Some(display_name.trim().to_string());
        Ok(account.identity.clone())
    }

    pub fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let email = email.trim().to_lowercase();
        validate::email(&email)?;
        let mut state = self.state.lock().unwrap();
        if !state.accounts.contains_key(&email) {
            return Err(ApiError::Validation(
                "No account found with this email".to_string(),
            ));
        }
        info!(%email, "password reset requested");
        state.resets.push(email);
        Ok(())
    }

    pub fn reset_requests(&self) -> Vec<String> {
        self.state.lock().unwrap().resets.clone()
    }

    /// Every account without its password hash, oldest first.
    pub fn users(&self) -> Vec<UserInfo> {
        let state = self.state.lock().unwrap();
        let mut users: Vec<UserInfo> = state
            .accounts
            .values()
            .map(|a| a.to_info(state.profiles.get(&a.identity.uid)))
            .collect();
        users.sort_by_key(|u| u.created_at);
        users
    }

    pub fn profile(&self, uid: &str) -> Option<ProfileRecord> {
        self.state.lock().unwrap().profiles.get(uid).cloned()
    }

    pub fn is_admin(&self, uid: &str) -> bool {
        self.profile(uid).is_some_and(|p| p.is_admin())
    }

    /// Store a profile written by its owner. The role cannot be raised this way:
    /// it stays whatever the stored profile already had, `user` for a new one.
    pub fn write_own_profile(&self, uid: &str, mut profile: ProfileRecord) -> Result<(), ApiError> {
        if profile.uid != uid {
            return Err(ApiError::Forbidden(
                "Missing or insufficient permissions".to_string(),
            ));
        }
        validate::required(&profile.display_name, "Name is required")?;
        profile.role = self.profile(uid).map(|p| p.role).unwrap_or_default();
        self.put_profile(profile);
        Ok(())
    }

    fn put_profile(&self, profile: ProfileRecord) {
        self.state
            .lock()
            .unwrap()
            .profiles
            .insert(profile.uid.clone(), profile);
    }

    /// Events ordered by date, earliest first.
    pub fn events(&self) -> Vec<Event> {
        let mut events = self.state.lock().unwrap().events.clone();
        events.sort_by_key(|e| (e.date, e.id));
        events
    }

    pub fn add_event(&self, event: NewEvent) -> Result<Event, ApiError> {
        let mut state = self.state.lock().unwrap();
        let id = state.events.len() as u64 + 1;
        let event = event.into_event(id, Utc::now())?;
        state.events.push(event.clone());
        Ok(event)
    }

    pub fn messages(&self) -> Vec<ContactMessage> {
        self.state.lock().unwrap().messages.clone()
    }

    pub fn add_message(&self, message: NewContactMessage) -> Result<ContactMessage, ApiError> {
        let mut state = self.state.lock().unwrap();
        let id = state.messages.len() as u64 + 1;
        let message = message.into_message(id, Utc::now())?;
        state.messages.push(message.clone());
        Ok(message)
    }
}

const SAMPLE_EVENTS: [(&str, &str, &str, &str); 3] = [
    (
        "2025-08-15",
        "Independence Day Celebration",
        "Join us for flag hoisting, cultural programs, and community feast",
        "School Ground",
    ),
    (
        "2025-10-02",
        "Clean Village Drive",
        "Community initiative to keep our village clean and green",
        "Village Center",
    ),
    (
        "2025-11-14",
        "Children's Day Cultural Program",
        "Special performances by village children and youth",
        "Community Hall",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Directory {
        let mut config = SiteConfig::default();
        config.content.seed_sample_events = false;
        Directory::seeded(config)
    }

    fn registration(email: &str) -> Registration {
        Registration {
            name: "Asha".into(),
            email: email.into(),
            password: "secret1".into(),
            phone: "9000000000".into(),
        }
    }

    #[test]
    fn test_seed_adds_sample_events_and_admin() {
        let directory =
            Directory::seeded(SiteConfig::default().with_admin("admin@ramnagar.example", "password1"));
        let events = directory.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].title, "Independence Day Celebration");

        let admin = directory.authenticate("ADMIN@ramnagar.example", "password1").unwrap();
        assert!(directory.is_admin(&admin.uid));
    }

    #[test]
    fn test_bad_admin_seed_keeps_config_and_events() {
        let mut config = SiteConfig::default().with_admin("admin@ramnagar.example", "admin");
        config.site.name = "Ramnagar Custom".into();
        config.routes.landing = "/notices".into();

        let directory = Directory::seeded(config);
        assert_eq!(directory.config().site.name, "Ramnagar Custom");
        assert_eq!(directory.config().routes.landing, "/notices");
        assert_eq!(directory.events().len(), 3);
        assert!(directory.users().is_empty());
        assert_eq!(
            directory.authenticate("admin@ramnagar.example", "admin").unwrap_err(),
            ApiError::InvalidCredentials
        );
    }

    #[test]
    fn test_register_reports_checks_in_order() {
        let directory = empty();
        let mut form = registration("a@x.com");
        form.phone.clear();
        assert_eq!(
            directory.register(form).unwrap_err(),
            ApiError::Validation("All fields are required".into())
        );

        let mut form = registration("not-an-email");
        form.password = "123".into();
        assert_eq!(
            directory.register(form).unwrap_err(),
            ApiError::Validation("Invalid email format".into())
        );

        directory.register(registration("a@x.com")).unwrap();
        let mut form = registration("A@X.com");
        form.password = "123".into();
        assert!(matches!(directory.register(form).unwrap_err(), ApiError::Duplicate(_)));

        let mut form = registration("b@x.com");
        form.password = "123".into();
        assert_eq!(
            directory.register(form).unwrap_err(),
            ApiError::Validation("Password must be at least 6 characters long".into())
        );
    }

    #[test]
    fn test_register_stores_lowercased_user_profile() {
        let directory = empty();
        let info = directory.register(registration("Asha@X.com")).unwrap();
        assert_eq!(info.email, "asha@x.com");
        assert_eq!(info.role, Role::User);
        assert_eq!(info.phone.as_deref(), Some("9000000000"));

        let users = directory.users();
        assert_eq!(users, vec![info]);
    }

    #[test]
    fn test_authenticate_rejects_unknown_and_wrong_password() {
        let directory = empty();
        directory.create_account("a@x.com", "secret1", None).unwrap();
        assert_eq!(
            directory.authenticate("a@x.com", "wrong").unwrap_err(),
            ApiError::InvalidCredentials
        );
        assert_eq!(
            directory.authenticate("b@x.com", "secret1").unwrap_err(),
            ApiError::InvalidCredentials
        );
    }

    #[test]
    fn test_owner_cannot_raise_role() {
        let directory = empty();
        let identity = directory.create_account("a@x.com", "secret1", None).unwrap();
        let mut profile = ProfileRecord::new_user(&identity, "Alice", None, Utc::now());
        profile.role = Role::Admin;

        directory.write_own_profile(&identity.uid, profile.clone()).unwrap();
        assert!(!directory.is_admin(&identity.uid));

        let err = directory.write_own_profile("someone-else", profile).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }

    #[test]
    fn test_events_sorted_by_date() {
        let directory = Directory::seeded(SiteConfig::default());
        directory
            .add_event(NewEvent {
                title: "Harvest Fair".into(),
                date: "2025-09-01".into(),
                description: "Stalls and games".into(),
                location: "Mandi".into(),
            })
            .unwrap();
        let titles: Vec<String> = directory.events().into_iter().map(|e| e.title).collect();
        assert_eq!(titles[1], "Harvest Fair");
        assert_eq!(directory.events()[1].id, 4);
    }

    #[test]
    fn test_message_gets_next_id() {
        let directory = empty();
        let message = directory
            .add_message(NewContactMessage {
                name: "Ravi".into(),
                email: "ravi@x.com".into(),
                phone: None,
                message: "Street light broken".into(),
            })
            .unwrap();
        assert_eq!(message.id, 1);
        assert_eq!(message.phone, "");
        assert_eq!(directory.messages().len(), 1);
    }

    #[test]
    fn test_password_reset_needs_known_account() {
        let directory = empty();
        directory.create_account("a@x.com", "secret1", None).unwrap();
        directory.request_password_reset("A@x.com").unwrap();
        assert!(directory.request_password_reset("b@x.com").is_err());
        assert_eq!(directory.reset_requests(), vec!["a@x.com".to_string()]);
    }
}

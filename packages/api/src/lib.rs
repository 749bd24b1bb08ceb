//! # API crate: shared fullstack server functions for the village portal
//!
//! Defines every Dioxus server function the web frontend calls, the plain JSON
//! endpoints in [`rest`], and the server-side state they share.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | partly `server` | Argon2 password hashing, cookie-session helpers |
//! | [`directory`] | `server` | In-memory accounts, profiles, events and contact messages |
//! | [`error`] | `server` | [`error::ApiError`] with its HTTP status mapping |
//! | [`models`] | none | [`UserInfo`] and the [`Verdict`] wrapper |
//! | [`rest`] | `server` | axum router for `/api/auth/*`, `/api/events`, `/api/contact` |
//! | [`settings`] | `server` | `village.toml` and environment overrides |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is compiled twice: with the real body
//! behind `#[cfg(feature = "server")]`, and as a client stub that forwards the
//! call over HTTP. Refusals come back as [`Verdict::Rejected`]; `ServerFnError`
//! means the call itself failed.
//!
//! - **Identity**: `current_identity`, `sign_in`, `sign_up`, `set_display_name`, `sign_out`, `request_password_reset`
//! - **Profiles** (`users` collection): `read_profile`, `write_profile`
//! - **Site**: `site_info`, `list_events`, `create_event`, `submit_contact`, `list_messages`

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use store::{
    ContactMessage, Event, Identity, NewContactMessage, NewEvent, ProfileRecord, SiteConfig,
};

pub mod auth;
#[cfg(feature = "server")]
pub mod directory;
#[cfg(feature = "server")]
pub mod error;
pub mod models;
#[cfg(feature = "server")]
pub mod rest;
#[cfg(feature = "server")]
pub mod settings;

pub use models::{UserInfo, Verdict};

/// Public part of the site configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteInfo {
    pub name: String,
    pub tagline: String,
    /// Where signed-in visitors are sent from guest-only pages.
    pub landing: String,
    /// Where anonymous visitors are sent from member pages.
    pub signed_out: String,
}

impl From<&SiteConfig> for SiteInfo {
    fn from(config: &SiteConfig) -> Self {
        Self {
            name: config.site.name.clone(),
            tagline: config.site.tagline.clone(),
            landing: config.routes.landing.clone(),
            signed_out: config.routes.signed_out.clone(),
        }
    }
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self::from(&SiteConfig::default())
    }
}

#[cfg(feature = "server")]
async fn require_admin(session: &tower_sessions::Session) -> Result<String, error::ApiError> {
    let uid = auth::require_uid(session).await?;
    if directory::Directory::shared().is_admin(&uid) {
        Ok(uid)
    } else {
        Err(error::ApiError::Forbidden("Admin access required".to_string()))
    }
}

/// Identity bound to the caller's cookie session, if any.
#[cfg(feature = "server")]
#[get("/api/identity/me", session: tower_sessions::Session)]
pub async fn current_identity() -> Result<Option<Identity>, ServerFnError> {
    let Some(uid) = auth::session_uid(&session).await? else {
        return Ok(None);
    };
    Ok(directory::Directory::shared().identity(&uid))
}

#[cfg(not(feature = "server"))]
#[get("/api/identity/me")]
pub async fn current_identity() -> Result<Option<Identity>, ServerFnError> {
    Ok(None)
}

/// Verify email and password and bind the cookie session to the account.
#[cfg(feature = "server")]
#[post("/api/identity/sign-in", session: tower_sessions::Session)]
pub async fn sign_in(email: String, password: String) -> Result<Verdict<Identity>, ServerFnError> {
    let result = async {
        let identity = directory::Directory::shared().authenticate(&email, &password)?;
        auth::start_session(&session, &identity.uid).await?;
        tracing::info!(uid = %identity.uid, "signed in");
        Ok::<_, error::ApiError>(identity)
    }
    .await;
    error::into_verdict(result)
}

#[cfg(not(feature = "server"))]
#[post("/api/identity/sign-in")]
pub async fn sign_in(email: String, password: String) -> Result<Verdict<Identity>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create credentials and sign the new account in. The profile is written
/// separately with [`write_profile`].
#[cfg(feature = "server")]
#[post("/api/identity/sign-up", session: tower_sessions::Session)]
pub async fn sign_up(email: String, password: String) -> Result<Verdict<Identity>, ServerFnError> {
    let result = async {
        let identity = directory::Directory::shared().create_account(&email, &password, None)?;
        auth::start_session(&session, &identity.uid).await?;
        tracing::info!(uid = %identity.uid, "account created");
        Ok::<_, error::ApiError>(identity)
    }
    .await;
    error::into_verdict(result)
}

#[cfg(not(feature = "server"))]
#[post("/api/identity/sign-up")]
pub async fn sign_up(email: String, password: String) -> Result<Verdict<Identity>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/identity/display-name", session: tower_sessions::Session)]
pub async fn set_display_name(
    uid: String,
    display_name: String,
) -> Result<Verdict<Identity>, ServerFnError> {
    let result = async {
        let caller = auth::require_uid(&session).await?;
        if caller != uid {
            return Err(error::ApiError::Forbidden(
                "Missing or insufficient permissions".to_string(),
            ));
        }
        directory::Directory::shared().set_display_name(&uid, &display_name)
    }
    .await;
    error::into_verdict(result)
}

#[cfg(not(feature = "server"))]
#[post("/api/identity/display-name")]
pub async fn set_display_name(
    uid: String,
    display_name: String,
) -> Result<Verdict<Identity>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/identity/sign-out", session: tower_sessions::Session)]
pub async fn sign_out() -> Result<(), ServerFnError> {
    auth::end_session(&session).await?;
    tracing::info!("signed out");
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/identity/sign-out")]
pub async fn sign_out() -> Result<(), ServerFnError> {
    Ok(())
}

#[cfg(feature = "server")]
#[post("/api/identity/password-reset")]
pub async fn request_password_reset(email: String) -> Result<Verdict<()>, ServerFnError> {
    error::into_verdict(directory::Directory::shared().request_password_reset(&email))
}

#[cfg(not(feature = "server"))]
#[post("/api/identity/password-reset")]
pub async fn request_password_reset(email: String) -> Result<Verdict<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Read `users/{uid}`. Residents may read their own profile, admins any.
#[cfg(feature = "server")]
#[get("/api/profile/:uid", session: tower_sessions::Session)]
pub async fn read_profile(uid: String) -> Result<Verdict<Option<ProfileRecord>>, ServerFnError> {
    let result = async {
        let caller = auth::require_uid(&session).await?;
        let directory = directory::Directory::shared();
        if caller != uid && !directory.is_admin(&caller) {
            return Err(error::ApiError::Forbidden(
                "Missing or insufficient permissions".to_string(),
            ));
        }
        Ok::<_, error::ApiError>(directory.profile(&uid))
    }
    .await;
    error::into_verdict(result)
}

#[cfg(not(feature = "server"))]
#[get("/api/profile/:uid")]
pub async fn read_profile(uid: String) -> Result<Verdict<Option<ProfileRecord>>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Write the caller's own `users/{uid}` document.
#[cfg(feature = "server")]
#[post("/api/profile", session: tower_sessions::Session)]
pub async fn write_profile(profile: ProfileRecord) -> Result<Verdict<()>, ServerFnError> {
    let result = async {
        let caller = auth::require_uid(&session).await?;
        directory::Directory::shared().write_own_profile(&caller, profile)
    }
    .await;
    error::into_verdict(result)
}

#[cfg(not(feature = "server"))]
#[post("/api/profile")]
pub async fn write_profile(profile: ProfileRecord) -> Result<Verdict<()>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/site/info")]
pub async fn site_info() -> Result<SiteInfo, ServerFnError> {
    Ok(SiteInfo::from(directory::Directory::shared().config()))
}

#[cfg(not(feature = "server"))]
#[get("/api/site/info")]
pub async fn site_info() -> Result<SiteInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Events sorted by date.
#[cfg(feature = "server")]
#[get("/api/site/events")]
pub async fn list_events() -> Result<Vec<Event>, ServerFnError> {
    Ok(directory::Directory::shared().events())
}

#[cfg(not(feature = "server"))]
#[get("/api/site/events")]
pub async fn list_events() -> Result<Vec<Event>, ServerFnError> {
    Ok(Vec::new())
}

#[cfg(feature = "server")]
#[post("/api/site/events", session: tower_sessions::Session)]
pub async fn create_event(event: NewEvent) -> Result<Verdict<Event>, ServerFnError> {
    let result = async {
        let uid = require_admin(&session).await?;
        let event = directory::Directory::shared().add_event(event)?;
        tracing::info!(%uid, id = event.id, "event created");
        Ok::<_, error::ApiError>(event)
    }
    .await;
    error::into_verdict(result)
}

#[cfg(not(feature = "server"))]
#[post("/api/site/events")]
pub async fn create_event(event: NewEvent) -> Result<Verdict<Event>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Store a contact form message and return its id.
#[cfg(feature = "server")]
#[post("/api/site/contact")]
pub async fn submit_contact(message: NewContactMessage) -> Result<Verdict<u64>, ServerFnError> {
    let result = directory::Directory::shared()
        .add_message(message)
        .map(|m| m.id);
    if let Ok(id) = &result {
        tracing::info!(id, "contact message received");
    }
    error::into_verdict(result)
}

#[cfg(not(feature = "server"))]
#[post("/api/site/contact")]
pub async fn submit_contact(message: NewContactMessage) -> Result<Verdict<u64>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/site/messages", session: tower_sessions::Session)]
pub async fn list_messages() -> Result<Verdict<Vec<ContactMessage>>, ServerFnError> {
    let result = async {
        require_admin(&session).await?;
        Ok::<_, error::ApiError>(directory::Directory::shared().messages())
    }
    .await;
    error::into_verdict(result)
}

#[cfg(not(feature = "server"))]
#[get("/api/site/messages")]
pub async fn list_messages() -> Result<Verdict<Vec<ContactMessage>>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

//! # Resident accounts as the server sees them
//!
//! ## [`StoredAccount`] (server only)
//!
//! One row of the in-memory directory: the identity handed to clients, the Argon2
//! PHC hash of the password, and when the account was created. The hash never
//! leaves the server.
//!
//! ## [`UserInfo`]
//!
//! The client-safe projection returned by the REST endpoints: identity plus the
//! profile fields that exist, without the password hash. Serialises in camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store::{ProfileRecord, Role};

#[cfg(feature = "server")]
use store::Identity;

#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct StoredAccount {
    pub identity: Identity,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl StoredAccount {
    /// Project into a [`UserInfo`], taking name, phone and role from the profile when present.
    pub fn to_info(&self, profile: Option<&ProfileRecord>) -> UserInfo {
        UserInfo {
            id: self.identity.uid.clone(),
            name: profile
                .map(|p| p.display_name.clone())
                .or_else(|| self.identity.display_name.clone()),
            email: self.identity.email.clone(),
            phone: profile.and_then(|p| p.phone.clone()),
            role: profile.map(|p| p.role).unwrap_or_default(),
            created_at: profile.map(|p| p.created_at).unwrap_or(self.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<&ProfileRecord> for UserInfo {
    fn from(profile: &ProfileRecord) -> Self {
        Self {
            id: profile.uid.clone(),
            name: Some(profile.display_name.clone()),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            role: profile.role,
            created_at: profile.created_at,
        }
    }
}

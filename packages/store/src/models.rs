//! # Domain models for identities, profiles, events and contact messages
//!
//! These types cross the server/client boundary via Dioxus server functions and
//! the plain REST endpoints, so they are all `Serialize + Deserialize`. Field
//! names serialise in camelCase to match the JSON the village pages exchange.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Identity`] | The opaque handle the credential service hands out: `uid`, `email`, optional display name. |
//! | [`ProfileRecord`] | The denormalised profile document stored under `users/{uid}`. |
//! | [`Role`] | `user` or `admin`. New accounts are always `user`. |
//! | [`Event`] / [`NewEvent`] | Village events shown on the home page and managed from the admin panel. |
//! | [`ContactMessage`] / [`NewContactMessage`] | Messages sent through the public contact form. |

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::validate::{self, FieldError};

/// Identity handle issued by the credential store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Identity {
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// Profile document kept in the `users` collection, keyed by uid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl ProfileRecord {
    /// Profile for a freshly registered resident. The role is always [`Role::User`].
    pub fn new_user(
        identity: &Identity,
        display_name: &str,
        phone: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            uid: identity.uid.clone(),
            email: identity.email.clone(),
            display_name: display_name.to_string(),
            phone: phone
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            role: Role::User,
            created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A village event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u64,
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

/// Event fields as submitted by the admin form. Missing fields deserialise as empty
/// so that validation, not the JSON layer, reports them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
}

impl NewEvent {
    /// Check required fields and turn the submission into an [`Event`].
    pub fn into_event(self, id: u64, created_at: DateTime<Utc>) -> Result<Event, FieldError> {
        let title = self.title.trim();
        let description = self.description.trim();
        let location = self.location.trim();
        let date = self.date.trim();
        if title.is_empty() || date.is_empty() || description.is_empty() || location.is_empty() {
            return Err(FieldError::new(
                "Title, date, description, and location are required",
            ));
        }
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| FieldError::new("Date must be in YYYY-MM-DD format"))?;

        Ok(Event {
            id,
            date,
            title: title.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            created_at,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    New,
    Read,
    Replied,
}

/// A message received through the contact form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub status: MessageStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl NewContactMessage {
    pub fn into_message(
        self,
        id: u64,
        timestamp: DateTime<Utc>,
    ) -> Result<ContactMessage, FieldError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(FieldError::new("Name, email, and message are required"));
        }
        validate::email(email)?;

        Ok(ContactMessage {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: self.phone.unwrap_or_default().trim().to_string(),
            message: message.to_string(),
            timestamp,
            status: MessageStatus::New,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_profile_defaults_to_user_role() {
        let identity = Identity::new("uid-1", "a@x.com");
        let profile = ProfileRecord::new_user(&identity, "Alice", Some("  "), Utc::now());
        assert_eq!(profile.role, Role::User);
        assert_eq!(profile.display_name, "Alice");
        assert!(profile.phone.is_none());
        assert!(!profile.is_admin());
    }

    #[test]
    fn test_profile_document_uses_camel_case_keys() {
        let identity = Identity::new("uid-1", "a@x.com");
        let profile = ProfileRecord::new_user(&identity, "Alice", Some("9876543210"), Utc::now());
        let doc = toml::to_string(&profile).unwrap();
        assert!(doc.contains("displayName"));
        assert!(doc.contains("createdAt"));
        assert!(doc.contains("role = \"user\""));
    }

    #[test]
    fn test_new_event_requires_all_fields() {
        let submission = NewEvent {
            title: "Health Camp".to_string(),
            date: "2025-07-25".to_string(),
            description: String::new(),
            location: "Community Center".to_string(),
        };
        let err = submission.into_event(1, Utc::now()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Title, date, description, and location are required"
        );
    }

    #[test]
    fn test_new_event_rejects_bad_date() {
        let submission = NewEvent {
            title: "Health Camp".to_string(),
            date: "25/07/2025".to_string(),
            description: "Free checkups".to_string(),
            location: "Community Center".to_string(),
        };
        assert!(submission.into_event(1, Utc::now()).is_err());
    }

    #[test]
    fn test_contact_message_starts_as_new() {
        let submission = NewContactMessage {
            name: "Ramesh".to_string(),
            email: "ramesh@example.com".to_string(),
            phone: None,
            message: "Street light is broken".to_string(),
        };
        let msg = submission.into_message(4, Utc::now()).unwrap();
        assert_eq!(msg.id, 4);
        assert_eq!(msg.status, MessageStatus::New);
        assert_eq!(msg.phone, "");
    }

    #[test]
    fn test_contact_message_validates_email() {
        let submission = NewContactMessage {
            name: "Ramesh".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            message: "Hello".to_string(),
        };
        let err = submission.into_message(1, Utc::now()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid email format");
    }
}

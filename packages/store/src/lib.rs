pub mod catalog;
pub mod config;
pub mod feed;
pub mod models;
pub mod provider;
pub mod validate;

mod memory;
pub use memory::{MemoryCredentialStore, MemoryProfileStore};

pub use config::SiteConfig;
pub use feed::{SessionFeed, SessionNotice, SessionSubscription, Unsubscribe};
pub use models::{
    ContactMessage, Event, Identity, MessageStatus, NewContactMessage, NewEvent, ProfileRecord,
    Role,
};
pub use provider::{CredentialStore, ProfileStore, StoreError, USERS_COLLECTION};
pub use validate::FieldError;

//! Data models for the application.

mod user;
mod verdict;

#[cfg(feature = "server")]
pub use user::StoredAccount;
pub use user::UserInfo;
pub use verdict::Verdict;

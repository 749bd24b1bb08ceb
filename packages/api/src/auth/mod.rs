//! Password hashing and cookie-session helpers.

#[cfg(feature = "server")]
mod password;
mod session;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
pub use session::SESSION_USER_ID_KEY;
#[cfg(feature = "server")]
pub use session::{end_session, require_uid, session_uid, start_session};

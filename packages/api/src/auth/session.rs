//! Cookie session bookkeeping. The session only ever holds the signed-in uid.

/// Key for storing the user id in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

#[cfg(feature = "server")]
use tower_sessions::Session;

#[cfg(feature = "server")]
use crate::error::ApiError;

#[cfg(feature = "server")]
pub async fn session_uid(session: &Session) -> Result<Option<String>, ApiError> {
    Ok(session.get::<String>(SESSION_USER_ID_KEY).await?)
}

#[cfg(feature = "server")]
pub async fn require_uid(session: &Session) -> Result<String, ApiError> {
    session_uid(session).await?.ok_or(ApiError::NotAuthenticated)
}

/// Bind the session to `uid`, issuing a fresh session id.
#[cfg(feature = "server")]
pub async fn start_session(session: &Session, uid: &str) -> Result<(), ApiError> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, uid.to_string()).await?;
    Ok(())
}

#[cfg(feature = "server")]
pub async fn end_session(session: &Session) -> Result<(), ApiError> {
    session.flush().await?;
    Ok(())
}

//! Server-side error type shared by the REST handlers and the server functions.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus::prelude::ServerFnError;
use store::FieldError;
use thiserror::Error;

use crate::models::Verdict;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("{0}")]
    Forbidden(String),

    /// The detail is logged; clients only see a generic message.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Duplicate(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials | ApiError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn internal(e: impl std::fmt::Display) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<FieldError> for ApiError {
    fn from(e: FieldError) -> Self {
        ApiError::Validation(e.message().to_string())
    }
}

impl From<tower_sessions::session::Error> for ApiError {
    fn from(e: tower_sessions::session::Error) -> Self {
        ApiError::Internal(format!("session store: {e}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(%detail, "request failed");
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<ApiError> for ServerFnError {
    fn from(e: ApiError) -> Self {
        if let ApiError::Internal(detail) = &e {
            tracing::error!(%detail, "server function failed");
        }
        ServerFnError::new(e.to_string())
    }
}

/// Turn a handler result into what a server function returns: refusals become
/// [`Verdict::Rejected`], internal faults stay errors.
pub fn into_verdict<T>(result: Result<T, ApiError>) -> Result<Verdict<T>, ServerFnError> {
    match result {
        Ok(value) => Ok(Verdict::Accepted(value)),
        Err(e @ ApiError::Internal(_)) => Err(e.into()),
        Err(e) => Ok(Verdict::Rejected(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Duplicate("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden("x".into()).status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::internal("boom").status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        assert_eq!(ApiError::internal("disk on fire").to_string(), "Internal server error");
    }

    #[test]
    fn test_refusals_become_rejected_verdicts() {
        let verdict = into_verdict::<()>(Err(ApiError::InvalidCredentials)).unwrap();
        assert_eq!(verdict, Verdict::Rejected("Invalid email or password".into()));
        assert!(into_verdict::<()>(Err(ApiError::internal("boom"))).is_err());
        assert_eq!(into_verdict(Ok(1)).unwrap(), Verdict::Accepted(1));
    }
}

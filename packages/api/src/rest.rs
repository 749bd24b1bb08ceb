//! # Plain JSON endpoints
//!
//! | Route | Method | Success | Failure |
//! |-------|--------|---------|---------|
//! | `/api/auth/login` | POST `{email,password}` | 200 `{message,user}`, starts a cookie session | 400, 401, 500 |
//! | `/api/auth/register` | POST `{name,email,password,phone}` | 201 `{message,user}` | 400, 500 |
//! | `/api/auth/register` | GET | 200 `{users,total}` | 500 |
//! | `/api/auth/status` | GET | 200 `{authenticated,user,message}` | 500 |
//! | `/api/events` | GET | 200 `{events,total}`, sorted by date | |
//! | `/api/events` | POST `{title,date,description,location}` | 201 event | 400 |
//! | `/api/contact` | GET | 200 `{messages,total}` | |
//! | `/api/contact` | POST `{name,email,phone?,message}` | 200 `{message,id}` | 400 |
//!
//! Errors are `{"error": "..."}`. None of these routes check who is calling.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use store::{NewContactMessage, NewEvent};
use tower_sessions::Session;
use tracing::info;

use crate::auth::{session_uid, start_session};
use crate::directory::{Directory, Registration};
use crate::error::ApiError;

pub fn router(directory: Directory) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register).get(list_users))
        .route("/api/auth/status", get(status))
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/contact", get(list_messages).post(submit_contact))
        .with_state(directory)
}

fn payload<T: DeserializeOwned>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|e| ApiError::Validation(format!("Invalid request body: {}", e.body_text())))
}

#[derive(Deserialize)]
struct Credentials {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

async fn login(
    State(directory): State<Directory>,
    session: Session,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let credentials = payload(body)?;
    if credentials.email.trim().is_empty() || credentials.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let identity = directory.authenticate(&credentials.email, &credentials.password)?;
    start_session(&session, &identity.uid).await?;
    let user = directory
        .user_info(&identity.uid)
        .ok_or_else(|| ApiError::internal("account vanished during login"))?;
    info!(uid = %identity.uid, "login via REST");

    Ok(Json(json!({ "message": "Login successful", "user": user })))
}

async fn register(
    State(directory): State<Directory>,
    body: Result<Json<Registration>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user = directory.register(payload(body)?)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully", "user": user })),
    ))
}

async fn list_users(State(directory): State<Directory>) -> Json<Value> {
    let users = directory.users();
    Json(json!({ "total": users.len(), "users": users }))
}

async fn status(
    State(directory): State<Directory>,
    session: Session,
) -> Result<Json<Value>, ApiError> {
    let user = session_uid(&session)
        .await?
        .and_then(|uid| directory.user_info(&uid));
    Ok(Json(json!({
        "authenticated": user.is_some(),
        "user": user,
        "message": "Authentication check endpoint",
    })))
}

async fn list_events(State(directory): State<Directory>) -> Json<Value> {
    let events = directory.events();
    Json(json!({ "total": events.len(), "events": events }))
}

async fn create_event(
    State(directory): State<Directory>,
    body: Result<Json<NewEvent>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let event = directory.add_event(payload(body)?)?;
    info!(id = event.id, title = %event.title, "event created");
    Ok((StatusCode::CREATED, Json(json!(event))))
}

async fn list_messages(State(directory): State<Directory>) -> Json<Value> {
    let messages = directory.messages();
    Json(json!({ "total": messages.len(), "messages": messages }))
}

async fn submit_contact(
    State(directory): State<Directory>,
    body: Result<Json<NewContactMessage>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let message = directory.add_message(payload(body)?)?;
    info!(id = message.id, "contact message received");
    Ok(Json(json!({
        "message": "Contact message submitted successfully",
        "id": message.id,
    })))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, Response};
    use store::SiteConfig;
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    use super::*;

    fn app(directory: Directory) -> Router {
        router(directory).layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn directory() -> Directory {
        Directory::seeded(SiteConfig::default())
    }

    #[tokio::test]
    async fn test_register_then_login_starts_session() {
        let app = app(directory());

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/auth/register",
                json!({"name": "Asha", "email": "Asha@x.com", "password": "secret1", "phone": "9000000000"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(body["user"]["email"], "asha@x.com");
        assert_eq!(body["user"]["role"], "user");
        assert!(body["user"].get("password").is_none());

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/auth/login",
                json!({"email": "asha@x.com", "password": "secret1"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .unwrap()
            .to_string();
        assert_eq!(json_body(response).await["message"], "Login successful");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/auth/status")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["authenticated"], true);
        assert_eq!(body["user"]["name"], "Asha");
    }

    #[tokio::test]
    async fn test_login_failures() {
        let directory = directory();
        directory.create_account("a@x.com", "secret1", None).unwrap();
        let app = app(directory);

        let response = app
            .clone()
            .oneshot(post_json("/api/auth/login", json!({"email": "a@x.com"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Email and password are required");

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/auth/login",
                json!({"email": "a@x.com", "password": "wrong"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(response).await["error"], "Invalid email or password");

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_bad_request() {
        let app = app(directory());
        let form = json!({"name": "A", "email": "a@x.com", "password": "secret1", "phone": "1"});
        app.clone()
            .oneshot(post_json("/api/auth/register", form.clone()))
            .await
            .unwrap();
        let response = app
            .clone()
            .oneshot(post_json("/api/auth/register", form))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"],
            "User with this email already exists"
        );

        let body = json_body(app.oneshot(get("/api/auth/register")).await.unwrap()).await;
        assert_eq!(body["total"], 1);
    }

    #[tokio::test]
    async fn test_status_without_session() {
        let response = app(directory()).oneshot(get("/api/auth/status")).await.unwrap();
        let body = json_body(response).await;
        assert_eq!(body["authenticated"], false);
        assert!(body["user"].is_null());
    }

    #[tokio::test]
    async fn test_events_listing_and_creation() {
        let app = app(directory());

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/events",
                json!({"title": "Harvest Fair", "date": "2025-09-01", "description": "Stalls", "location": "Mandi"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let event = json_body(response).await;
        assert_eq!(event["id"], 4);
        assert!(event["createdAt"].is_string());

        let response = app
            .clone()
            .oneshot(post_json("/api/events", json!({"title": "No date"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"],
            "Title, date, description, and location are required"
        );

        let body = json_body(app.oneshot(get("/api/events")).await.unwrap()).await;
        assert_eq!(body["total"], 4);
        assert_eq!(body["events"][0]["date"], "2025-08-15");
        assert_eq!(body["events"][1]["title"], "Harvest Fair");
    }

    #[tokio::test]
    async fn test_contact_submission() {
        let app = app(directory());

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/contact",
                json!({"name": "Ravi", "email": "ravi@x", "message": "Hi"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Invalid email format");

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/contact",
                json!({"name": "Ravi", "email": "ravi@x.com", "message": "Street light broken"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["id"], 1);

        let body = json_body(app.oneshot(get("/api/contact")).await.unwrap()).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["messages"][0]["status"], "new");
        assert_eq!(body["messages"][0]["phone"], "");
    }
}

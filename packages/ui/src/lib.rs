//! This crate contains all shared UI for the workspace.

use std::time::Duration;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod navbar;
pub use navbar::{NavLink, Navbar};

mod auth;
pub use auth::{use_session, use_session_hook, ClientSession, LogoutButton, SessionProvider};

pub mod remote;
pub use remote::{RemoteCredentialStore, RemoteProfileStore};

mod protected_route;
pub use protected_route::ProtectedRoute;

mod session_indicator;
pub use session_indicator::SessionIndicator;

pub mod notifications;
pub use notifications::{notify, notify_error, notify_success, use_toasts, ToastKind, ToastProvider};

/// Timer that works both in the browser and on native targets.
pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

use api::SiteInfo;
use dioxus::prelude::*;

use ui::{SessionProvider, ToastProvider};
use views::{
    Admin, Dashboard, Education, Emergency, Farmers, Government, Home, Login, MemberLayout,
    NotFound, Notices, Register, ResetPassword, Support,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/reset-password")]
    ResetPassword {},
    #[layout(MemberLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/emergency")]
        Emergency {},
        #[route("/notices")]
        Notices {},
        #[route("/support")]
        Support {},
        #[route("/education")]
        Education {},
        #[route("/government")]
        Government {},
        #[route("/farmers")]
        Farmers {},
        #[route("/admin")]
        Admin {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Seed accounts and events before the first request
    let directory = api::directory::Directory::shared().clone();
    tracing::info!(site = %directory.config().site.name, "directory ready");

    // Sessions live in memory, like everything else on this server
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    let router = axum::Router::new()
        // Plain JSON endpoints first
        .merge(api::rest::router(directory))
        // Then serve the Dioxus application
        .serve_dioxus_application(ServeConfig::new(), App)
        // Add session layer to all routes
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "could not bind");
            return;
        }
    };
    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, router.into_make_service()).await {
        tracing::error!(error = %e, "server stopped");
    }
}

#[component]
fn App() -> Element {
    let site = use_resource(|| async move { api::site_info().await.unwrap_or_default() });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            SessionProvider {
                {match site() {
                    Some(info) => rsx! { Site { info } },
                    None => rsx! {
                        div { class: "guard-loading", p { "Loading..." } }
                    },
                }}
            }
        }
    }
}

/// Router once the site settings are known, so every guard starts with the
/// configured redirect targets.
#[component]
fn Site(info: SiteInfo) -> Element {
    use_context_provider(|| info.clone());
    rsx! {
        Router::<Route> {}
    }
}

use api::SiteInfo;
use dioxus::prelude::*;

use crate::Route;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod reset_password;
pub use reset_password::ResetPassword;

mod member_layout;
pub use member_layout::MemberLayout;

mod dashboard;
pub use dashboard::Dashboard;

mod emergency;
pub use emergency::Emergency;

mod notices;
pub use notices::Notices;

mod support;
pub use support::Support;

mod education;
pub use education::Education;

mod government;
pub use government::Government;

mod farmers;
pub use farmers::Farmers;

mod admin;
pub use admin::Admin;

pub(crate) fn use_site() -> SiteInfo {
    use_context::<SiteInfo>()
}

pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// Title block shared by the dashboard pages.
#[component]
pub(crate) fn PageHeader(#[props(into)] title: String, #[props(into)] subtitle: String) -> Element {
    rsx! {
        header {
            class: "page-header",
            Link { class: "back-link", to: Route::Dashboard {}, "Back to dashboard" }
            h1 { "{title}" }
            p { "{subtitle}" }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "not-found",
            h1 { "Page not found" }
            p { "There is nothing at /{path}." }
            Link { to: Route::Home {}, "Go to the home page" }
        }
    }
}

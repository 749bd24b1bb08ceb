use dioxus::prelude::*;
use ui::{use_session, LogoutButton, Navbar, ProtectedRoute, SessionIndicator};

use super::use_site;
use crate::Route;

/// Shell for every members-only page: navbar on top, the page below.
#[component]
pub fn MemberLayout() -> Element {
    let site = use_site();
    let session = use_session();

    rsx! {
        ProtectedRoute {
            redirect_to: site.signed_out.clone(),
            landing: site.landing.clone(),

            Navbar {
                brand: site.name.clone(),
                Link { to: Route::Dashboard {}, "Dashboard" }
                Link { to: Route::Notices {}, "Notices" }
                Link { to: Route::Support {}, "Support" }
                if session().is_admin() {
                    Link { to: Route::Admin {}, "Admin" }
                }
                SessionIndicator {}
                LogoutButton {}
            }

            main {
                class: "member-content",
                Outlet::<Route> {}
            }
        }
    }
}

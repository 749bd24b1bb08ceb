//! Session status badge for the navbar.

use dioxus::prelude::*;

use crate::auth::use_session;
use crate::icons::{FaUser, FaUserShield, FaUserSlash};
use crate::Icon;

/// Shows who is signed in.
///
/// - **Resident**: user icon and display name
/// - **Admin**: shield icon and display name
/// - **Anonymous**: slashed-user icon ("Not signed in")
///
/// Renders nothing while the session is still being restored.
#[component]
pub fn SessionIndicator() -> Element {
    let session = use_session();
    let state = session();

    if state.loading {
        return rsx! {};
    }

    let name = state.display_name().unwrap_or_default().to_string();
    match (state.is_authenticated(), state.is_admin()) {
        (true, true) => rsx! {
            span {
                class: "session-indicator session-indicator--admin",
                title: "Signed in as administrator",
                Icon { icon: FaUserShield, width: 14, height: 14 }
                span { "{name}" }
            }
        },
        (true, false) => rsx! {
            span {
                class: "session-indicator session-indicator--resident",
                title: "Signed in",
                Icon { icon: FaUser, width: 14, height: 14 }
                span { "{name}" }
            }
        },
        (false, _) => rsx! {
            span {
                class: "session-indicator session-indicator--anonymous",
                title: "Not signed in",
                Icon { icon: FaUserSlash, width: 14, height: 14 }
            }
        },
    }
}

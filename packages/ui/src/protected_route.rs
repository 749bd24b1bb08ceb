use dioxus::prelude::*;
use session::{GuardView, RouteGuard};

use crate::auth::use_session;

/// Shows `children` only when the session matches the page's requirement.
///
/// Members-only pages (`require_auth`, the default) send anonymous visitors to
/// `redirect_to`; guest pages (`require_auth: false`) send signed-in users to
/// `landing`. Nothing is decided while the session is still loading. The
/// navigation runs as an effect after render, once per state change.
#[component]
pub fn ProtectedRoute(
    #[props(default = true)] require_auth: bool,
    #[props(default = "/".to_string())] redirect_to: String,
    #[props(default = "/dashboard".to_string())] landing: String,
    children: Element,
) -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let mut guard =
        use_signal(move || RouteGuard::new(redirect_to, landing).with_require_auth(require_auth));

    use_effect(move || {
        let current = session();
        guard.write().observe(&current, &mut |target: String| {
            tracing::debug!(%target, "route guard redirect");
            navigator.push(target);
        });
    });

    let view = guard.peek().view(&session());
    match view {
        GuardView::Placeholder => rsx! {
            div {
                class: "guard-loading",
                div { class: "spinner" }
                p { "Loading..." }
            }
        },
        GuardView::Nothing => rsx! {},
        GuardView::Children => rsx! { {children} },
    }
}

//! Session context and hooks for the UI.

use dioxus::prelude::*;
use session::{IdentityProvider, Session, SessionHook};

use crate::notifications::{notify_error, notify_success, use_toasts};
use crate::remote::{RemoteCredentialStore, RemoteProfileStore};

/// The session hook as mounted in the browser.
pub type ClientSession = SessionHook<RemoteCredentialStore, RemoteProfileStore>;

/// Current session state. Re-renders the caller whenever it changes.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The mounted hook, for sign-in, sign-up, logout and password reset.
pub fn use_session_hook() -> ClientSession {
    use_context::<ClientSession>()
}

/// Mounts the session hook once for the page and provides it, together with a
/// `Signal<Session>` mirror of its state, to everything below.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let credentials = use_hook(RemoteCredentialStore::new);
    let hook = use_hook({
        let credentials = credentials.clone();
        move || {
            ClientSession::mount(IdentityProvider::ready(credentials, RemoteProfileStore))
        }
    });
    let mut session = use_signal(|| hook.session());

    // The one subscription: applies every auth-state notification.
    use_future({
        let hook = hook.clone();
        move || {
            let hook = hook.clone();
            async move { hook.listen().await }
        }
    });

    // Mirror the hook's state into the signal the components read.
    use_future({
        let hook = hook.clone();
        move || {
            let mut context = hook.context();
            async move {
                session.set(context.current());
                while context.changed().await {
                    session.set(context.current());
                }
            }
        }
    });

    // First notification comes from the restored cookie session, later ones from
    // the periodic expiry check (every 30s).
    use_future(move || {
        let credentials = credentials.clone();
        async move {
            credentials.restore().await;
            credentials.watch_expiry().await;
        }
    });

    use_drop({
        let hook = hook.clone();
        move || hook.unmount()
    });

    use_context_provider(|| session);
    use_context_provider(|| hook.clone());

    rsx! {
        {children}
    }
}

/// Button to log out the current user. Where to go afterwards is left to the
/// route guards, which react to the cleared session.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let hook = use_session_hook();
    let mut toasts = use_toasts();
    let mut busy = use_signal(|| false);

    let onclick = move |_| {
        let hook = hook.clone();
        async move {
            busy.set(true);
            match hook.logout().await {
                Ok(()) => notify_success(&mut toasts, "Logged out", "See you again soon."),
                Err(e) => notify_error(&mut toasts, "Logout failed", e),
            }
            busy.set(false);
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: busy(),
            onclick: onclick,
            "{label}"
        }
    }
}

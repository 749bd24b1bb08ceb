//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{notify_error, notify_success, use_session_hook, use_toasts, ProtectedRoute};

use super::use_site;
use crate::Route;

/// Login page component. Guest-only: a signed-in visitor is sent to the landing page.
#[component]
pub fn Login() -> Element {
    let site = use_site();
    let hook = use_session_hook();
    let mut toasts = use_toasts();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let hook = hook.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            // The guard moves us on once the session notification arrives.
            match hook.sign_in(&email(), &password()).await {
                Ok(_) => notify_success(&mut toasts, "Login successful", "Welcome back!"),
                Err(e) => {
                    notify_error(&mut toasts, "Login failed", &e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        ProtectedRoute {
            require_auth: false,
            redirect_to: site.signed_out.clone(),
            landing: site.landing.clone(),

            div {
                class: "auth-container",

                h1 { "Welcome back" }
                p { class: "auth-subtitle", "Sign in to the {site.name} resident portal" }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p {
                    class: "auth-links",
                    Link { to: Route::ResetPassword {}, "Forgot password?" }
                }
                p {
                    class: "auth-links",
                    "New here? "
                    Link { to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}

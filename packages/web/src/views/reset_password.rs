use dioxus::prelude::*;
use ui::{notify_error, notify_success, use_session_hook, use_toasts, ProtectedRoute};

use super::use_site;
use crate::Route;

#[component]
pub fn ResetPassword() -> Element {
    let site = use_site();
    let hook = use_session_hook();
    let mut toasts = use_toasts();
    let mut email = use_signal(String::new);
    let mut sent = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_reset = move |evt: FormEvent| {
        evt.prevent_default();
        let hook = hook.clone();
        spawn(async move {
            loading.set(true);
            match hook.reset_password(&email()).await {
                Ok(()) => {
                    notify_success(
                        &mut toasts,
                        "Password reset email sent",
                        "Check your inbox for further instructions.",
                    );
                    sent.set(true);
                }
                Err(e) => notify_error(&mut toasts, "Reset failed", &e),
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
                h1 { "Reset Password" }

                if sent() {
                    p {
                        class: "auth-subtitle",
                        "If an account exists for {email}, a reset link is on its way."
                    }
                } else {
                    p { class: "auth-subtitle", "Enter your email and we will send you a reset link." }
                    form {
                        class: "auth-form",
                        onsubmit: handle_reset,
                        input {
                            r#type: "email",
                            placeholder: "Email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        button {
                            class: "primary",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Sending..." } else { "Send reset link" }
                        }
                    }
                }

                p {
                    class: "auth-links",
                    Link { to: Route::Login {}, "Back to sign in" }
                }
            }
        }
    }
}

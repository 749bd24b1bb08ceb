//! Registration page view.

use dioxus::prelude::*;
use ui::{notify_error, notify_success, use_session_hook, use_toasts, ProtectedRoute};

use super::use_site;
use crate::Route;

#[component]
pub fn Register() -> Element {
    let site = use_site();
    let hook = use_session_hook();
    let mut toasts = use_toasts();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let hook = hook.clone();
        spawn(async move {
            error.set(None);

            if password() != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let phone = phone();
            let phone = Some(phone.trim()).filter(|p| !p.is_empty());
            match hook.sign_up(&email(), &password(), &name(), phone).await {
                Ok(_) => notify_success(
                    &mut toasts,
                    "Registration successful",
                    "Your account has been created.",
                ),
                Err(e) => {
                    notify_error(&mut toasts, "Registration failed", &e);
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

                h1 { "Create Account" }
                p { class: "auth-subtitle", "Join the {site.name} resident portal" }

                form {
                    class: "auth-form",
                    onsubmit: handle_register,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    input {
                        r#type: "text",
                        placeholder: "Full name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    input {
                        r#type: "tel",
                        placeholder: "Phone (optional)",
                        value: phone(),
                        oninput: move |evt: FormEvent| phone.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password (min 6 characters)",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }

                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign up" }
                    }
                }

                p {
                    class: "auth-links",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}

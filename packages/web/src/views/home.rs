//! Public home page: hero, upcoming events, notable people and the contact form.

use dioxus::prelude::*;
use store::catalog::NOTABLE_PEOPLE;
use store::{Event, NewContactMessage};
use ui::{notify_error, notify_success, use_session, use_toasts, NavLink, Navbar};

use super::{today, use_site};
use crate::Route;

#[component]
pub fn Home() -> Element {
    let site = use_site();
    let session = use_session();

    rsx! {
        Navbar {
            brand: site.name.clone(),
            NavLink { href: "#events", label: "Events" }
            NavLink { href: "#people", label: "People" }
            NavLink { href: "#contact", label: "Contact" }
            if session().is_authenticated() {
                Link { to: Route::Dashboard {}, "Dashboard" }
            } else {
                Link { to: Route::Login {}, "Login" }
                Link { to: Route::Register {}, "Register" }
            }
        }

        section {
            class: "hero",
            h1 { "Welcome to {site.name}" }
            p { "{site.tagline}" }
            if !session().is_authenticated() {
                Link { class: "hero-cta", to: Route::Register {}, "Join the resident portal" }
            }
        }

        UpcomingEvents {}
        NotablePeople {}
        ContactForm {}

        footer {
            class: "site-footer",
            "{site.name} Gram Panchayat"
        }
    }
}

#[component]
fn UpcomingEvents() -> Element {
    let events = use_resource(|| async move { api::list_events().await });

    rsx! {
        section {
            id: "events",
            class: "home-section",
            h2 { "Upcoming Events" }

            {match &*events.read() {
                None => rsx! { p { class: "muted", "Loading events..." } },
                Some(Err(e)) => rsx! { p { class: "muted", "Could not load events: {e}" } },
                Some(Ok(list)) => {
                    let today = today();
                    let upcoming: Vec<_> = list.iter().filter(|e| e.date >= today).cloned().collect();
                    rsx! {
                        if upcoming.is_empty() {
                            p { class: "muted", "No upcoming events." }
                        }
                        div {
                            class: "card-grid",
                            for event in upcoming {
                                EventCard { key: "{event.id}", event }
                            }
                        }
                    }
                }
            }}
        }
    }
}

#[component]
pub(crate) fn EventCard(event: Event) -> Element {
    let date = event.date.format("%d %b %Y").to_string();
    rsx! {
        article {
            class: "card",
            span { class: "card-date", "{date}" }
            h3 { "{event.title}" }
            p { "{event.description}" }
            p { class: "muted", "{event.location}" }
        }
    }
}

#[component]
fn NotablePeople() -> Element {
    rsx! {
        section {
            id: "people",
            class: "home-section",
            h2 { "Notable People" }
            div {
                class: "card-grid",
                for person in NOTABLE_PEOPLE {
                    article {
                        key: "{person.name}",
                        class: "card",
                        h3 { "{person.name}" }
                        span { class: "card-tag", "{person.title}" }
                        p { "{person.description}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactForm() -> Element {
    let mut toasts = use_toasts();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            sending.set(true);
            let phone = phone();
            let submission = NewContactMessage {
                name: name(),
                email: email(),
                phone: Some(phone.trim().to_string()).filter(|p| !p.is_empty()),
                message: message(),
            };
            match api::submit_contact(submission).await {
                Ok(api::Verdict::Accepted(_)) => {
                    notify_success(
                        &mut toasts,
                        "Message sent",
                        "Thank you for contacting us. We will get back to you soon.",
                    );
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                Ok(api::Verdict::Rejected(reason)) => {
                    notify_error(&mut toasts, "Please check the form", reason)
                }
                Err(e) => notify_error(&mut toasts, "Message not sent", e),
            }
            sending.set(false);
        });
    };

    rsx! {
        section {
            id: "contact",
            class: "home-section",
            h2 { "Contact Us" }
            form {
                class: "contact-form",
                onsubmit: handle_submit,
                input {
                    r#type: "text",
                    placeholder: "Your name",
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
                textarea {
                    placeholder: "Your message",
                    rows: "4",
                    value: message(),
                    oninput: move |evt: FormEvent| message.set(evt.value()),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: sending(),
                    if sending() { "Sending..." } else { "Send message" }
                }
            }
        }
    }
}

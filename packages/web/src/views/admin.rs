//! Admin panel: create events, review events and contact messages.
//!
//! Only rendered for sessions whose profile carries the admin role. The server
//! functions check the role again.

use dioxus::prelude::*;
use store::{ContactMessage, MessageStatus, NewEvent};
use ui::{notify_error, notify_success, use_session, use_toasts};

use super::home::EventCard;
use super::PageHeader;

#[component]
pub fn Admin() -> Element {
    let session = use_session();

    if !session().is_admin() {
        return rsx! {
            PageHeader { title: "Admin Panel", subtitle: "Village administration" }
            p { class: "form-error", "Admin access required." }
        };
    }

    rsx! { AdminPanel {} }
}

#[component]
fn AdminPanel() -> Element {
    let mut events = use_resource(|| async move { api::list_events().await });
    let messages = use_resource(|| async move { api::list_messages().await });

    rsx! {
        PageHeader { title: "Admin Panel", subtitle: "Create events and read messages from visitors." }

        EventForm { on_created: move |_| events.restart() }

        section {
            class: "page-section",
            h2 { "Events" }
            {match &*events.read() {
                None => rsx! { p { class: "muted", "Loading events..." } },
                Some(Err(e)) => rsx! { p { class: "form-error", "Could not load events: {e}" } },
                Some(Ok(list)) => {
                    let total = list.len();
                    rsx! {
                        p { class: "muted", "{total} events" }
                        div {
                            class: "card-grid",
                            for event in list.iter().cloned() {
                                EventCard { key: "{event.id}", event }
                            }
                        }
                    }
                }
            }}
        }

        section {
            class: "page-section",
            h2 { "Contact Messages" }
            {match &*messages.read() {
                None => rsx! { p { class: "muted", "Loading messages..." } },
                Some(Err(e)) => rsx! { p { class: "form-error", "Could not load messages: {e}" } },
                Some(Ok(api::Verdict::Rejected(reason))) => rsx! { p { class: "form-error", "{reason}" } },
                Some(Ok(api::Verdict::Accepted(list))) => rsx! {
                    if list.is_empty() {
                        p { class: "muted", "No messages yet." }
                    }
                    for message in list.iter().cloned() {
                        MessageRow { key: "{message.id}", message }
                    }
                },
            }}
        }
    }
}

#[component]
fn EventForm(on_created: EventHandler<()>) -> Element {
    let mut toasts = use_toasts();
    let mut form = use_signal(NewEvent::default);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            saving.set(true);
            match api::create_event(form()).await {
                Ok(api::Verdict::Accepted(event)) => {
                    notify_success(&mut toasts, "Event created", &event.title);
                    form.set(NewEvent::default());
                    on_created.call(());
                }
                Ok(api::Verdict::Rejected(reason)) => {
                    notify_error(&mut toasts, "Event not created", reason)
                }
                Err(e) => notify_error(&mut toasts, "Event not created", e),
            }
            saving.set(false);
        });
    };

    rsx! {
        section {
            class: "page-section",
            h2 { "New Event" }
            form {
                class: "event-form",
                onsubmit: handle_submit,
                input {
                    r#type: "text",
                    placeholder: "Title",
                    value: form().title,
                    oninput: move |evt: FormEvent| form.write().title = evt.value(),
                }
                input {
                    r#type: "date",
                    value: form().date,
                    oninput: move |evt: FormEvent| form.write().date = evt.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Location",
                    value: form().location,
                    oninput: move |evt: FormEvent| form.write().location = evt.value(),
                }
                textarea {
                    placeholder: "Description",
                    rows: "3",
                    value: form().description,
                    oninput: move |evt: FormEvent| form.write().description = evt.value(),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Create event" }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ContactMessage) -> Element {
    let status = match message.status {
        MessageStatus::New => "new",
        MessageStatus::Read => "read",
        MessageStatus::Replied => "replied",
    };
    let received = message.timestamp.format("%d %b %Y %H:%M").to_string();
    rsx! {
        article {
            class: "card message-card",
            div {
                class: "card-meta",
                strong { "{message.name}" }
                span { class: "status status-{status}", "{status}" }
            }
            p { "{message.message}" }
            p { class: "muted", "{message.email} {message.phone}, {received}" }
        }
    }
}

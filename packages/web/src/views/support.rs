//! Complaint form and anonymous suggestion box. Complaints live in page state only.

use dioxus::prelude::*;
use store::catalog::{sample_complaints, Complaint, ComplaintForm, COMPLAINT_TYPES};
use store::validate;
use ui::{notify_error, notify_success, use_toasts};

use super::{today, PageHeader};

#[component]
pub fn Support() -> Element {
    rsx! {
        PageHeader {
            title: "Support",
            subtitle: "Report a problem to the Gram Panchayat or share an idea.",
        }
        ComplaintSection {}
        SuggestionBox {}
    }
}

#[component]
fn ComplaintSection() -> Element {
    let mut toasts = use_toasts();
    let mut complaints = use_signal(sample_complaints);
    let mut form = use_signal(ComplaintForm::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submission = form();
        let filed = submission.file(&mut complaints.write(), today());
        match filed {
            Ok(id) => {
                notify_success(
                    &mut toasts,
                    "Complaint submitted",
                    &format!("Your complaint number is #{id}."),
                );
                form.set(ComplaintForm::default());
            }
            Err(e) => notify_error(&mut toasts, "Complaint not submitted", e.message()),
        }
    };

    rsx! {
        section {
            class: "page-section",
            h2 { "File a Complaint" }
            form {
                class: "complaint-form",
                onsubmit: handle_submit,
                input {
                    r#type: "text",
                    placeholder: "Your name",
                    value: form().name,
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
                input {
                    r#type: "tel",
                    placeholder: "Phone",
                    value: form().phone,
                    oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                }
                select {
                    value: form().kind,
                    onchange: move |evt: FormEvent| form.write().kind = evt.value(),
                    option { value: "", "Select a category" }
                    for kind in COMPLAINT_TYPES {
                        option { key: "{kind}", value: "{kind}", "{kind}" }
                    }
                }
                textarea {
                    placeholder: "Describe the problem",
                    rows: "4",
                    value: form().message,
                    oninput: move |evt: FormEvent| form.write().message = evt.value(),
                }
                button { class: "primary", r#type: "submit", "Submit complaint" }
            }

            h3 { "Recent Complaints" }
            for complaint in complaints() {
                ComplaintRow { key: "{complaint.id}", complaint }
            }
        }
    }
}

#[component]
fn ComplaintRow(complaint: Complaint) -> Element {
    let status = complaint.status.label();
    let status_class = status.to_lowercase().replace(' ', "-");
    let date = complaint.date.format("%d %b %Y").to_string();
    rsx! {
        article {
            class: "card complaint-card",
            div {
                class: "card-meta",
                span { class: "card-tag", "#{complaint.id} {complaint.kind}" }
                span { class: "status status-{status_class}", "{status}" }
            }
            p { "{complaint.message}" }
            p { class: "muted", "{complaint.name}, {date}" }
        }
    }
}

#[component]
fn SuggestionBox() -> Element {
    let mut toasts = use_toasts();
    let mut suggestion = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match validate::required(&suggestion(), "Please write your suggestion first") {
            Ok(()) => {
                notify_success(
                    &mut toasts,
                    "Suggestion received",
                    "Thank you for helping improve our village.",
                );
                suggestion.set(String::new());
            }
            Err(e) => notify_error(&mut toasts, "Suggestion not sent", e.message()),
        }
    };

    rsx! {
        section {
            class: "page-section",
            h2 { "Suggestion Box" }
            p { class: "muted", "Suggestions are anonymous." }
            form {
                class: "suggestion-form",
                onsubmit: handle_submit,
                textarea {
                    placeholder: "Your idea for the village",
                    rows: "3",
                    value: suggestion(),
                    oninput: move |evt: FormEvent| suggestion.set(evt.value()),
                }
                button { class: "primary", r#type: "submit", "Send suggestion" }
            }
        }
    }
}

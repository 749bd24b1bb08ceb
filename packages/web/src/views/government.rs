use dioxus::prelude::*;
use store::catalog::{find_application, ApplicationRecord, Scheme, GOVERNMENT_SERVICES, WELFARE_SCHEMES};

use super::{today, PageHeader};

#[component]
pub fn Government() -> Element {
    rsx! {
        PageHeader {
            title: "Government Services",
            subtitle: "Certificates, welfare schemes and the status of your applications.",
        }

        section {
            class: "page-section",
            h2 { "Services" }
            div {
                class: "card-grid",
                for service in GOVERNMENT_SERVICES {
                    article {
                        key: "{service.id}",
                        class: "card",
                        div {
                            class: "card-meta",
                            span { class: "card-tag", "{service.status}" }
                            if service.online {
                                span { class: "status status-open", "Apply online" }
                            }
                        }
                        h3 { "{service.title}" }
                        p { "{service.description}" }
                        p { class: "muted", "Fee: {service.fee}. Processing time: {service.processing_time}." }
                        p { class: "muted", "Documents required:" }
                        ul {
                            class: "facility-list",
                            for document in service.documents {
                                li { key: "{document}", "{document}" }
                            }
                        }
                    }
                }
            }
        }

        SchemeList { title: "Welfare Schemes", schemes: WELFARE_SCHEMES }
        ApplicationLookup {}
    }
}

/// Scheme cards with an "open"/"closed" badge computed from today's date.
#[component]
pub(crate) fn SchemeList(title: &'static str, schemes: &'static [Scheme]) -> Element {
    let today = today();
    rsx! {
        section {
            class: "page-section",
            h2 { "{title}" }
            div {
                class: "card-grid",
                for scheme in schemes {
                    article {
                        key: "{scheme.id}",
                        class: "card",
                        div {
                            class: "card-meta",
                            if scheme.is_active_on(today) {
                                span { class: "status status-open", "Open" }
                            } else {
                                span { class: "status status-closed", "Closed" }
                            }
                            span { class: "card-date", "Deadline {scheme.deadline}" }
                        }
                        h3 { "{scheme.name}" }
                        p { "{scheme.description}" }
                        p { class: "muted", "Eligibility: {scheme.eligibility}" }
                        p { class: "muted", "Benefits: {scheme.benefits}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ApplicationLookup() -> Element {
    let mut application_id = use_signal(String::new);
    let mut result = use_signal(|| Option::<Option<&'static ApplicationRecord>>::None);

    let handle_lookup = move |evt: FormEvent| {
        evt.prevent_default();
        result.set(Some(find_application(&application_id())));
    };

    rsx! {
        section {
            class: "page-section",
            h2 { "Check Application Status" }
            form {
                class: "lookup-form",
                onsubmit: handle_lookup,
                input {
                    r#type: "text",
                    placeholder: "Application ID, e.g. APP001",
                    value: application_id(),
                    oninput: move |evt: FormEvent| application_id.set(evt.value()),
                }
                button { class: "primary", r#type: "submit", "Check status" }
            }

            {match result() {
                None => rsx! {},
                Some(None) => rsx! {
                    p { class: "form-error", "No application found with ID {application_id}." }
                },
                Some(Some(record)) => rsx! {
                    article {
                        class: "card",
                        h3 { "{record.service}" }
                        p { "Application {record.application_id}: " strong { "{record.status}" } }
                        p { class: "muted", "Submitted {record.submitted}, last updated {record.last_updated}" }
                    }
                },
            }}
        }
    }
}

use dioxus::prelude::*;
use store::catalog::{search_notices, COMMUNITY_EVENTS};
use ui::icons::FaFilePdf;
use ui::Icon;

use super::PageHeader;

#[component]
pub fn Notices() -> Element {
    let mut term = use_signal(String::new);
    let notices = search_notices(&term());

    rsx! {
        PageHeader {
            title: "Notices & Events",
            subtitle: "Announcements from the Gram Panchayat and upcoming community events.",
        }

        input {
            class: "search",
            r#type: "search",
            placeholder: "Search notices by title, content or category",
            value: term(),
            oninput: move |evt: FormEvent| term.set(evt.value()),
        }

        section {
            class: "page-section",
            h2 { "Notices" }
            if notices.is_empty() {
                p { class: "muted", "No notices match \"{term}\"." }
            }
            for notice in notices {
                article {
                    key: "{notice.id}",
                    class: "card notice-card",
                    div {
                        class: "card-meta",
                        span { class: "card-tag", "{notice.category}" }
                        span { class: "card-date", "{notice.date}" }
                    }
                    h3 { "{notice.title}" }
                    p { "{notice.content}" }
                    if notice.has_document {
                        span {
                            class: "attachment",
                            Icon { icon: FaFilePdf, width: 12, height: 12 }
                            " Document attached"
                        }
                    }
                }
            }
        }

        section {
            class: "page-section",
            h2 { "Community Events" }
            div {
                class: "card-grid",
                for event in COMMUNITY_EVENTS {
                    article {
                        key: "{event.title}",
                        class: "card",
                        span { class: "card-tag", "{event.category}" }
                        h3 { "{event.title}" }
                        p { class: "card-date", "{event.date} at {event.time}" }
                        p { "{event.description}" }
                        p { class: "muted", "{event.location}" }
                    }
                }
            }
        }
    }
}

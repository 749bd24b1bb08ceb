use dioxus::prelude::*;
use store::catalog::EMERGENCY_CONTACTS;
use ui::icons::FaPhone;
use ui::Icon;

use super::PageHeader;

#[component]
pub fn Emergency() -> Element {
    rsx! {
        PageHeader {
            title: "Emergency Contacts",
            subtitle: "Tap a number to call. Available 24 hours.",
        }

        div {
            class: "card-grid",
            for contact in EMERGENCY_CONTACTS {
                article {
                    key: "{contact.id}",
                    class: "card emergency-card",
                    h3 { "{contact.name}" }
                    p { class: "muted", "{contact.address}" }
                    a {
                        class: "dial-button",
                        href: contact.dial_href(),
                        Icon { icon: FaPhone, width: 14, height: 14 }
                        span { "{contact.phone}" }
                    }
                }
            }
        }
    }
}

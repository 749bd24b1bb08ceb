use dioxus::prelude::*;
use ui::icons::{
    FaBullhorn, FaGraduationCap, FaHandshake, FaLandmark, FaPhone, FaSeedling, FaUserShield,
};
use ui::{use_session, Icon};

use crate::Route;

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Phone,
    Bullhorn,
    Handshake,
    GraduationCap,
    Landmark,
    Seedling,
}

#[derive(Clone, PartialEq)]
struct Section {
    title: &'static str,
    description: &'static str,
    glyph: Glyph,
    to: Route,
}

fn sections() -> Vec<Section> {
    vec![
        Section {
            title: "Emergency Contacts",
            glyph: Glyph::Phone,
            description: "Hospital, police, fire and panchayat numbers",
            to: Route::Emergency {},
        },
        Section {
            title: "Notices & Events",
            glyph: Glyph::Bullhorn,
            description: "Announcements from the Gram Panchayat",
            to: Route::Notices {},
        },
        Section {
            title: "Support",
            glyph: Glyph::Handshake,
            description: "File a complaint or leave a suggestion",
            to: Route::Support {},
        },
        Section {
            title: "Education",
            glyph: Glyph::GraduationCap,
            description: "Schools, scholarships and training programs",
            to: Route::Education {},
        },
        Section {
            title: "Government Services",
            glyph: Glyph::Landmark,
            description: "Certificates, welfare schemes and application status",
            to: Route::Government {},
        },
        Section {
            title: "Farmers Corner",
            glyph: Glyph::Seedling,
            description: "Crop rates, weather and agricultural schemes",
            to: Route::Farmers {},
        },
    ]
}

#[component]
fn SectionIcon(glyph: Glyph) -> Element {
    match glyph {
        Glyph::Phone => rsx! { Icon { icon: FaPhone, width: 28, height: 28 } },
        Glyph::Bullhorn => rsx! { Icon { icon: FaBullhorn, width: 28, height: 28 } },
        Glyph::Handshake => rsx! { Icon { icon: FaHandshake, width: 28, height: 28 } },
        Glyph::GraduationCap => rsx! { Icon { icon: FaGraduationCap, width: 28, height: 28 } },
        Glyph::Landmark => rsx! { Icon { icon: FaLandmark, width: 28, height: 28 } },
        Glyph::Seedling => rsx! { Icon { icon: FaSeedling, width: 28, height: 28 } },
    }
}

/// Landing page for signed-in residents.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let state = session();
    let name = state.display_name().unwrap_or("Resident").to_string();

    rsx! {
        div {
            class: "dashboard",
            h1 { "Welcome, {name}" }
            p { class: "dashboard-subtitle", "What would you like to do today?" }

            div {
                class: "section-grid",
                for section in sections() {
                    Link {
                        key: "{section.title}",
                        class: "section-card",
                        to: section.to.clone(),
                        SectionIcon { glyph: section.glyph }
                        h2 { "{section.title}" }
                        p { "{section.description}" }
                    }
                }
                if state.is_admin() {
                    Link {
                        class: "section-card admin",
                        to: Route::Admin {},
                        Icon { icon: FaUserShield, width: 28, height: 28 }
                        h2 { "Admin Panel" }
                        p { "Create events and read contact messages" }
                    }
                }
            }
        }
    }
}

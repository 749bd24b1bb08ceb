use dioxus::prelude::*;
use store::catalog::{LIBRARIES, SCHOLARSHIPS, SCHOOLS, TRAINING_PROGRAMS};

use super::PageHeader;

#[component]
pub fn Education() -> Element {
    rsx! {
        PageHeader {
            title: "Education",
            subtitle: "Schools, scholarships, skill training and libraries in and around the village.",
        }

        section {
            class: "page-section",
            h2 { "Schools" }
            div {
                class: "card-grid",
                for school in SCHOOLS {
                    article {
                        key: "{school.name}",
                        class: "card",
                        span { class: "card-tag", "{school.kind}" }
                        h3 { "{school.name}" }
                        p { "Classes {school.classes}, {school.strength} students" }
                        p { class: "muted", "{school.address}" }
                        p { class: "muted", "Contact: {school.contact}" }
                        ul {
                            class: "facility-list",
                            for facility in school.facilities {
                                li { key: "{facility}", "{facility}" }
                            }
                        }
                    }
                }
            }
        }

        section {
            class: "page-section",
            h2 { "Scholarships" }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Scholarship" }
                        th { "Eligibility" }
                        th { "Amount" }
                        th { "Deadline" }
                        th { "Status" }
                    }
                }
                tbody {
                    for scholarship in SCHOLARSHIPS {
                        tr {
                            key: "{scholarship.name}",
                            td { "{scholarship.name}" }
                            td { "{scholarship.eligibility}" }
                            td { "{scholarship.amount}" }
                            td { "{scholarship.deadline}" }
                            td {
                                if scholarship.open {
                                    span { class: "status status-open", "Open" }
                                } else {
                                    span { class: "status status-closed", "Closed" }
                                }
                            }
                        }
                    }
                }
            }
        }

        section {
            class: "page-section",
            h2 { "Training Programs" }
            div {
                class: "card-grid",
                for program in TRAINING_PROGRAMS {
                    article {
                        key: "{program.name}",
                        class: "card",
                        h3 { "{program.name}" }
                        p { "{program.description}" }
                        p { class: "muted", "{program.duration}, next batch {program.next_batch}" }
                        p { class: "muted", "{program.seats} seats, fee {program.fee}" }
                    }
                }
            }
        }

        section {
            class: "page-section",
            h2 { "Libraries" }
            div {
                class: "card-grid",
                for library in LIBRARIES {
                    article {
                        key: "{library.name}",
                        class: "card",
                        h3 { "{library.name}" }
                        p { class: "muted", "{library.address}" }
                        p { "Open {library.timings}" }
                        p { class: "muted", "Contact: {library.contact}" }
                        ul {
                            class: "facility-list",
                            for facility in library.facilities {
                                li { key: "{facility}", "{facility}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

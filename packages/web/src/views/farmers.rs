use dioxus::prelude::*;
use store::catalog::{Trend, CROP_RATES, FARMER_SCHEMES, WEATHER};
use ui::icons::{FaArrowDown, FaArrowUp, FaMinus};
use ui::Icon;

use super::government::SchemeList;
use super::PageHeader;

#[component]
pub fn Farmers() -> Element {
    rsx! {
        PageHeader {
            title: "Farmers Corner",
            subtitle: "Today's mandi rates, the weather and schemes for farmers.",
        }

        section {
            class: "page-section",
            h2 { "Crop Rates (per quintal)" }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Crop" }
                        th { "Variety" }
                        th { "Today" }
                        th { "Yesterday" }
                        th { "Change" }
                        th { "Market" }
                    }
                }
                tbody {
                    for rate in CROP_RATES {
                        tr {
                            key: "{rate.name}",
                            td { "{rate.name}" }
                            td { "{rate.variety}" }
                            td { "₹{rate.today}" }
                            td { "₹{rate.yesterday}" }
                            td {
                                TrendBadge { trend: rate.trend(), change: rate.change() }
                            }
                            td { "{rate.market}" }
                        }
                    }
                }
            }
        }

        section {
            class: "page-section",
            h2 { "Weather" }
            div {
                class: "weather-now",
                span { class: "weather-temp", "{WEATHER.temperature}°C" }
                span { "{WEATHER.condition}" }
                span { class: "muted", "Humidity {WEATHER.humidity}%, wind {WEATHER.wind_speed} km/h" }
            }
            div {
                class: "forecast",
                for day in WEATHER.forecast {
                    div {
                        key: "{day.day}",
                        class: "forecast-day",
                        strong { "{day.day}" }
                        span { "{day.temperature}°C" }
                        span { class: "muted", "{day.condition}" }
                    }
                }
            }
        }

        SchemeList { title: "Agricultural Schemes", schemes: FARMER_SCHEMES }
    }
}

#[component]
fn TrendBadge(trend: Trend, change: i64) -> Element {
    match trend {
        Trend::Up => rsx! {
            span {
                class: "trend trend-up",
                Icon { icon: FaArrowUp, width: 10, height: 10 }
                " +{change}"
            }
        },
        Trend::Down => rsx! {
            span {
                class: "trend trend-down",
                Icon { icon: FaArrowDown, width: 10, height: 10 }
                " {change}"
            }
        },
        Trend::Stable => rsx! {
            span {
                class: "trend trend-stable",
                Icon { icon: FaMinus, width: 10, height: 10 }
                " 0"
            }
        },
    }
}

use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top bar with the site name on the left and `children` (links, buttons) on the right.
#[component]
pub fn Navbar(#[props(into)] brand: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        nav {
            class: "navbar",
            span { class: "navbar-brand", "{brand}" }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}

/// Plain anchor styled like the other navbar entries. Routed links come from the
/// app's `Link` component; this one is for in-page anchors like `#contact`.
#[component]
pub fn NavLink(#[props(into)] href: String, #[props(into)] label: String) -> Element {
    rsx! {
        a { class: "navbar-link", href: "{href}", "{label}" }
    }
}

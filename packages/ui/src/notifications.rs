use std::time::Duration;

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaXmark};
use crate::Icon;

const TOASTER_CSS: Asset = asset!("/assets/styling/toaster.css");

/// Toasts shown at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;
const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, title: &str, description: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            kind,
            title: title.to_string(),
            description: description.to_string(),
        });
        if self.entries.len() > MAX_TOASTS {
            let excess = self.entries.len() - MAX_TOASTS;
            self.entries.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a toast and schedule its removal.
pub fn notify(toasts: &mut Signal<Toasts>, kind: ToastKind, title: &str, description: &str) {
    let id = toasts.write().push(kind, title, description);
    let mut toasts = *toasts;
    spawn(async move {
        crate::sleep(TOAST_LIFETIME).await;
        toasts.write().dismiss(id);
    });
}

pub fn notify_success(toasts: &mut Signal<Toasts>, title: &str, description: &str) {
    notify(toasts, ToastKind::Success, title, description);
}

pub fn notify_error(toasts: &mut Signal<Toasts>, title: &str, error: impl std::fmt::Display) {
    notify(toasts, ToastKind::Error, title, &error.to_string());
}

/// Provides the toast list to its children and renders the toasts on top.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        Toaster {}
    }
}

#[component]
fn Toaster() -> Element {
    let mut toasts = use_toasts();
    let entries = toasts().entries().to_vec();

    rsx! {
        document::Stylesheet { href: TOASTER_CSS }

        div {
            class: "toaster",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Error => "toast error",
                        ToastKind::Success => "toast success",
                        ToastKind::Info => "toast info",
                    },
                    span {
                        class: "toast-icon",
                        {match toast.kind {
                            ToastKind::Error => rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
                            ToastKind::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
                            ToastKind::Info => rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
                        }}
                    }
                    div {
                        class: "toast-body",
                        strong { "{toast.title}" }
                        if !toast.description.is_empty() {
                            p { "{toast.description}" }
                        }
                    }
                    button {
                        class: "toast-close",
                        title: "Dismiss",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldest_toasts_are_dropped() {
        let mut toasts = Toasts::default();
        for i in 0..6 {
            toasts.push(ToastKind::Info, &format!("toast {i}"), "");
        }
        let titles: Vec<&str> = toasts.entries().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["toast 2", "toast 3", "toast 4", "toast 5"]);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut toasts = Toasts::default();
        let first = toasts.push(ToastKind::Success, "Login successful", "Welcome back!");
        toasts.push(ToastKind::Error, "Login failed", "Invalid email or password");
        toasts.dismiss(first);
        assert_eq!(toasts.entries().len(), 1);
        assert_eq!(toasts.entries()[0].kind, ToastKind::Error);
    }
}

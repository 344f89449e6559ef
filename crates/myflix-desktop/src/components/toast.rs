//! # Toast Component
//!
//! Shows the latest notification for a couple of seconds.

use std::time::Duration;

use dioxus::prelude::*;

use crate::state::Toast;

/// How long a toast stays visible.
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Renders the toast in `toast` and clears it after [`TOAST_DURATION`].
#[component]
pub fn ToastHost(toast: Signal<Option<Toast>>) -> Element {
    let mut toast = toast;

    use_effect(move || {
        let Some(shown) = toast.read().clone() else {
            return;
        };

        spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            // A newer toast keeps its own timer.
            if toast.peek().as_ref().is_some_and(|t| t.seq == shown.seq) {
                toast.set(None);
            }
        });
    });

    let current = toast.read().clone();

    rsx! {
        if let Some(current) = current {
            div {
                class: "toast glass-panel",
                onclick: move |_| toast.set(None),
                span { "{current.text}" }
                span { class: "toast-action", "OK" }
            }
        }
    }
}

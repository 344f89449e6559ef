//! # Shell Component
//!
//! Outermost layout shared by every route.

use dioxus::prelude::*;

use myflix_views::ViewContext;

use super::ToastHost;
use crate::router::Route;
use crate::state::{AppState, RouterNavigator, Toast, ToastNotifier};

/// Root layout component.
///
/// Builds the [`ViewContext`] every page uses. It lives inside the router
/// so that navigation from view models can reach it.
#[component]
pub fn Shell() -> Element {
    let state = use_context::<AppState>();
    let navigator = use_navigator();
    let toast = use_signal(|| Option::<Toast>::None);

    use_context_provider(|| {
        ViewContext::new(
            state.client(),
            ToastNotifier::new(toast),
            RouterNavigator::new(navigator),
        )
    });

    rsx! {
        Outlet::<Route> {}
        ToastHost { toast }
    }
}

//! # Layout Component
//!
//! Header and navigation for the logged-in pages.

use dioxus::prelude::*;

use myflix_views::{NavBar, ViewContext};

use crate::router::Route;

/// Main layout wrapper component.
///
/// ```text
/// +---------------------------------------------+
/// | MyFlix           Movies  Profile  Logout    |
/// |---------------------------------------------|
/// |                                             |
/// |               Main Content                  |
/// |                 (Outlet)                    |
/// +---------------------------------------------+
/// ```
#[component]
pub fn Layout() -> Element {
    let bar = NavBar::new(use_context::<ViewContext>());
    let to_movies = bar.clone();
    let to_profile = bar.clone();

    rsx! {
        div {
            class: "app-layout",

            header {
                class: "app-header",

                h1 { "MyFlix" }

                nav {
                    class: "nav-links",

                    button {
                        class: "btn-ghost",
                        onclick: move |_| to_movies.all_movies(),
                        "Movies"
                    }

                    button {
                        class: "btn-ghost",
                        onclick: move |_| to_profile.user_profile(),
                        "Profile"
                    }

                    button {
                        class: "btn-sm btn-glass",
                        onclick: move |_| bar.logout(),
                        "Logout"
                    }
                }
            }

            main {
                class: "content",

                Outlet::<Route> {}
            }
        }
    }
}

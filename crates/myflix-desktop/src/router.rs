//! # Routing
//!
//! Defines the application routes and navigation structure.

use dioxus::prelude::*;

use myflix_views::Screen;

use crate::components::{Layout, Shell};
use crate::views::{Movies, Profile, Welcome};

/// Application routes.
///
/// Every route sits inside [`Shell`], which provides the view context and
/// toasts. The logged-in pages additionally get the [`Layout`] header.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        /// Login and registration.
        #[route("/")]
        Welcome {},

        #[layout(Layout)]
            /// Movie catalog with favorites.
            #[route("/movies")]
            Movies {},

            /// The user's profile.
            #[route("/profile")]
            Profile {},
        #[end_layout]
    #[end_layout]
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Welcome => Route::Welcome {},
            Screen::Movies => Route::Movies {},
            Screen::Profile => Route::Profile {},
        }
    }
}

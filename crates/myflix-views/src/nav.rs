//! # Navigation Bar
//!
//! Page switching and logout.

use crate::context::{Screen, ViewContext};

/// Actions behind the navigation bar buttons.
#[derive(Debug, Clone)]
pub struct NavBar {
    ctx: ViewContext,
}

impl NavBar {
    /// Creates the navigation bar actions.
    #[must_use]
    pub fn new(ctx: ViewContext) -> Self {
        Self { ctx }
    }

    /// Shows the movie list.
    pub fn all_movies(&self) {
        self.ctx.navigate(Screen::Movies);
    }

    /// Shows the profile page.
    pub fn user_profile(&self) {
        self.ctx.navigate(Screen::Profile);
    }

    /// Ends the session and returns to the welcome page.
    pub fn logout(&self) {
        tracing::info!("Logging out");
        self.ctx.session().clear();
        self.ctx.navigate(Screen::Welcome);
    }
}

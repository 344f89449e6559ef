//! # View Context
//!
//! What every view needs from its surroundings.

use std::fmt;
use std::rc::Rc;

use myflix_client::{ApiClient, ApiError, SessionStore};

/// Pages a view can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Logged-out landing page with the login and registration forms.
    Welcome,
    /// The movie catalog.
    Movies,
    /// The user's profile.
    Profile,
}

/// Shows short-lived messages to the user (toast, snackbar, status line).
pub trait Notifier {
    /// Displays `message`.
    fn notify(&self, message: &str);
}

/// Switches the visible page.
pub trait Navigator {
    /// Navigates to `screen`.
    fn navigate(&self, screen: Screen);
}

/// Shared dependencies of all views.
///
/// Cheap to clone. The session is reached through the client so there is a
/// single owner for it.
#[derive(Clone)]
pub struct ViewContext {
    client: ApiClient,
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
}

impl ViewContext {
    /// Creates a context.
    pub fn new(
        client: ApiClient,
        notifier: impl Notifier + 'static,
        navigator: impl Navigator + 'static,
    ) -> Self {
        Self {
            client,
            notifier: Rc::new(notifier),
            navigator: Rc::new(navigator),
        }
    }

    /// Returns the API client.
    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Returns the session the client authenticates with.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        self.client.session()
    }

    /// Shows `message` to the user.
    pub fn notify(&self, message: &str) {
        self.notifier.notify(message);
    }

    /// Shows the user-facing text of a failed request.
    pub fn notify_error(&self, err: &ApiError) {
        self.notifier.notify(err.message());
    }

    /// Navigates to `screen`.
    pub fn navigate(&self, screen: Screen) {
        tracing::debug!(?screen, "Navigating");
        self.navigator.navigate(screen);
    }
}

impl fmt::Debug for ViewContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewContext")
            .field("base_url", &self.client.base_url().as_str())
            .field("session", self.client.session())
            .finish_non_exhaustive()
    }
}

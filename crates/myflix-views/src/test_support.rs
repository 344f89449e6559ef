//! Recording doubles for view tests.

use std::cell::RefCell;
use std::rc::Rc;

use myflix_client::{ApiClient, SessionStore, Url};

use crate::{Navigator, Notifier, Screen, ViewContext};

#[derive(Clone, Default)]
pub(crate) struct RecordingNotifier {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingNavigator {
    screens: Rc<RefCell<Vec<Screen>>>,
}

impl RecordingNavigator {
    pub(crate) fn screens(&self) -> Vec<Screen> {
        self.screens.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, screen: Screen) {
        self.screens.borrow_mut().push(screen);
    }
}

/// A view context wired to `base_url` with recording doubles.
pub(crate) struct Harness {
    pub(crate) ctx: ViewContext,
    pub(crate) session: SessionStore,
    pub(crate) notifier: RecordingNotifier,
    pub(crate) navigator: RecordingNavigator,
}

impl Harness {
    pub(crate) fn new(base_url: &str) -> Self {
        let session = SessionStore::in_memory();
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let client = ApiClient::new(Url::parse(base_url).unwrap(), session.clone());

        Self {
            ctx: ViewContext::new(client, notifier.clone(), navigator.clone()),
            session,
            notifier,
            navigator,
        }
    }

    /// Same as [`Harness::new`] with a session for user `u1`.
    pub(crate) fn logged_in(base_url: &str) -> Self {
        let harness = Self::new(base_url);
        harness.session.set("abc", "u1");
        harness
    }
}

pub(crate) fn movie_json(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "Title": title,
        "Description": format!("{title} synopsis."),
        "Genre": { "Name": "Drama", "Description": "Serious." },
        "Director": { "Name": "Someone", "Bio": "Directs." }
    })
}

pub(crate) fn user_json(favorites: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "_id": "u1",
        "Username": "alice",
        "Email": "alice@example.com",
        "Birthday": "1990-01-01",
        "FavoriteMovies": favorites
    })
}

//! Toasts and routing behind the view models' feedback traits.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use myflix_views::{Navigator as ViewNavigator, Notifier, Screen};

use crate::router::Route;

/// A message currently shown as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Increases with every toast, so a dismiss timer only clears its own.
    pub seq: u64,
    /// Text to show.
    pub text: String,
}

/// Shows notifications in the toast slot rendered by the shell.
#[derive(Clone)]
pub struct ToastNotifier {
    slot: Signal<Option<Toast>>,
    seq: Rc<Cell<u64>>,
}

impl ToastNotifier {
    /// Creates a notifier writing to `slot`.
    #[must_use]
    pub fn new(slot: Signal<Option<Toast>>) -> Self {
        Self {
            slot,
            seq: Rc::new(Cell::new(0)),
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str) {
        let seq = self.seq.get() + 1;
        self.seq.set(seq);
        tracing::debug!(seq, message, "Toast");

        let mut slot = self.slot;
        slot.set(Some(Toast {
            seq,
            text: message.to_string(),
        }));
    }
}

/// Maps view [`Screen`]s onto router pushes.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigator: Navigator,
}

impl RouterNavigator {
    /// Wraps the router's navigator.
    #[must_use]
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl ViewNavigator for RouterNavigator {
    fn navigate(&self, screen: Screen) {
        self.navigator.push(Route::from(screen));
    }
}

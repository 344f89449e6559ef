//! # Views
//!
//! Page components rendered by the router. Each page owns a view model from
//! `myflix-views` in a signal and renders from it.

mod movies;
mod profile;
mod welcome;

pub use movies::Movies;
pub use profile::Profile;
pub use welcome::Welcome;

use std::future::Future;

use dioxus::prelude::*;

/// Runs a view model request in the background and applies its result.
///
/// `request` owns everything it needs, so the page stays editable while it
/// is in flight. Only `apply` touches the model once it finishes. If the
/// page was left in the meantime the result is dropped.
pub(crate) fn run<V, T>(
    mut view: Signal<V>,
    request: impl Future<Output = T> + 'static,
    apply: impl FnOnce(&mut V, T) + 'static,
) where
    V: 'static,
    T: 'static,
{
    spawn(async move {
        let outcome = request.await;

        if let Ok(mut slot) = view.try_write() {
            apply(&mut slot, outcome);
        }
    });
}

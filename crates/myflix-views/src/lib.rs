//! # MyFlix Views
//!
//! View models for the MyFlix client, independent of any UI toolkit.
//!
//! Each view owns the state its page renders and exposes the actions the
//! page's buttons and forms trigger. Views talk to the API through the
//! [`ViewContext`] they are built with and report back to the user through
//! its [`Notifier`] and [`Navigator`].
//!
//! - [`LoginView`] - log in and start a session
//! - [`RegistrationView`] - create an account
//! - [`MovieListView`] - catalog, favorites and detail dialogs
//! - [`ProfileView`] - view, edit and delete the account
//! - [`NavBar`] - page switching and logout

mod context;
mod login;
pub mod messages;
mod movie_list;
mod nav;
mod profile;
mod registration;

#[cfg(test)]
mod test_support;

pub use context::{Navigator, Notifier, Screen, ViewContext};
pub use login::LoginView;
pub use movie_list::{Catalog, MovieDialog, MovieListView};
pub use nav::NavBar;
pub use profile::{ProfileForm, ProfileUpdate, ProfileView};
pub use registration::RegistrationView;

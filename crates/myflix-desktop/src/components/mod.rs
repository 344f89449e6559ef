//! # UI Components
//!
//! Reusable UI components for the MyFlix desktop application.
//!
//! - [`Shell`] - Root layout providing the view context and toasts
//! - [`Layout`] - Header with navigation for logged-in pages
//! - [`MovieCard`] - One movie with its actions
//! - [`MovieDetails`] - Genre, director and synopsis dialog
//! - [`ToastHost`] - Transient notification area

mod layout;
mod movie_card;
mod movie_details;
mod shell;
mod toast;

pub use layout::Layout;
pub use movie_card::MovieCard;
pub use movie_details::MovieDetails;
pub use shell::Shell;
pub use toast::ToastHost;

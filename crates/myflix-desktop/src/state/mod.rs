//! # Application State
//!
//! Services shared by every page, and the adapters that let view models
//! talk back to the UI.

mod app_state;
mod feedback;

pub use app_state::AppState;
pub use feedback::{RouterNavigator, Toast, ToastNotifier};

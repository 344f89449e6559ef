//! # MyFlix Client
//!
//! Data-access layer for the MyFlix movie catalog API.
//!
//! ## Modules
//!
//! - [`ApiClient`] - one method per REST endpoint, bearer auth, uniform errors
//! - [`SessionStore`] - the current token and user id, optionally persisted
//! - [`Config`] - where the API lives
//!
//! Every failure an [`ApiClient`] method can produce is logged once and
//! surfaced as an [`ApiError`] carrying only its [`ErrorKind`]; its display
//! text is always [`GENERIC_ERROR_MESSAGE`].

mod client;
mod config;
mod error;
mod session;

pub use client::ApiClient;
pub use config::{Config, ConfigError, API_URL_ENV, DEFAULT_API_URL};
pub use error::{ApiError, ApiResult, ErrorKind, GENERIC_ERROR_MESSAGE};
pub use session::{Session, SessionError, SessionStore};

pub use myflix_types as types;
pub use reqwest::Url;

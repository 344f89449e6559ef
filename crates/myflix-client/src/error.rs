//! # API Errors
//!
//! Error types for API operations.
//!
//! [`RequestError`] keeps the full detail of what went wrong and never
//! leaves this crate. [`ApiError::report`] logs it and collapses it into the
//! caller-facing [`ApiError`].

use thiserror::Error;

/// The one message shown to users for any failed request.
pub const GENERIC_ERROR_MESSAGE: &str = "Something bad happened; please try again later.";

/// Detailed failure of a single request.
#[derive(Error, Debug)]
pub(crate) enum RequestError {
    /// Network or HTTP transport error.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("server error: {status} - {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The body did not match the endpoint's schema.
    #[error("invalid response format: {0}")]
    MalformedResponse(String),

    /// A user-scoped call was made without a user id in the session.
    #[error("no user id in session")]
    MissingSession,

    /// The endpoint URL could not be built from the base URL.
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),
}

impl RequestError {
    pub(crate) fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::Status,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::MissingSession => ErrorKind::MissingSession,
            Self::InvalidUrl(_) => ErrorKind::InvalidRequest,
        }
    }
}

/// Broad category of a failed request.
///
/// Informational only: every kind is presented to the user the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never got an HTTP response.
    Transport,
    /// The API rejected the request (auth, validation, not found, conflict).
    Status,
    /// The API answered 2xx with a body that could not be decoded.
    MalformedResponse,
    /// No session user id was available to address the request.
    MissingSession,
    /// The request could not be built.
    InvalidRequest,
}

/// Caller-facing error for API operations.
///
/// Displays as [`GENERIC_ERROR_MESSAGE`]. The status code and body of the
/// original failure are only available in the logs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Something bad happened; please try again later.")]
pub struct ApiError {
    kind: ErrorKind,
}

impl ApiError {
    /// Logs `err` for `operation` and returns its normalized form.
    pub(crate) fn report(operation: &'static str, err: RequestError) -> Self {
        match &err {
            RequestError::Status { status, body } => {
                tracing::error!(operation, status, body = %body, "API request rejected");
            }
            other => {
                tracing::error!(operation, error = %other, "API request failed");
            }
        }

        Self { kind: err.kind() }
    }

    /// Returns the category of the failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message to show to the user.
    #[must_use]
    pub fn message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Normalizes the result of `operation`.
pub(crate) fn normalize<T>(
    operation: &'static str,
    result: Result<T, RequestError>,
) -> ApiResult<T> {
    result.map_err(|err| ApiError::report(operation, err))
}

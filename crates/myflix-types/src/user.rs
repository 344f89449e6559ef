//! Account types: credentials, registration, profile and login payloads.

use serde::{Deserialize, Serialize};

/// Username and password submitted to `POST /login`.
///
/// Only ever held transiently by a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

impl Credentials {
    /// Creates credentials from a username and password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Registration body for `POST /users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewUser {
    /// Desired username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
    /// Contact email.
    pub email: String,
    /// Birthday as `YYYY-MM-DD`; omitted when blank.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub birthday: String,
}

/// Update body for `PUT /users/{id}`.
///
/// Fields left as `None` are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserUpdate {
    /// New username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// New password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// New email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New birthday.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl UserUpdate {
    /// Builds an update from raw form input, dropping blank fields.
    #[must_use]
    pub fn from_form(username: &str, password: &str, email: &str, birthday: &str) -> Self {
        fn field(value: &str) -> Option<String> {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        }

        Self {
            username: field(username),
            password: field(password),
            email: field(email),
            birthday: field(birthday),
        }
    }
}

/// A user record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserProfile {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Username.
    pub username: String,
    /// Password hash as stored by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Birthday as sent by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    /// Ids of the user's favorite movies.
    #[serde(default)]
    pub favorite_movies: Vec<String>,
}

impl UserProfile {
    /// Returns true if `movie_id` is among the user's favorites.
    #[must_use]
    pub fn is_favorite(&self, movie_id: &str) -> bool {
        self.favorite_movies.iter().any(|id| id == movie_id)
    }
}

/// Successful `POST /login` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user.
    pub user: UserProfile,
    /// Bearer token for subsequent calls.
    pub token: String,
}

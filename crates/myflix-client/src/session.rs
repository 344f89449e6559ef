//! # Session Storage
//!
//! Holds the bearer token and user id of the current login.
//!
//! A [`SessionStore`] is a handle: clones share the same session, so the
//! application creates one and hands clones to the [`crate::ApiClient`] and
//! to every view. The persistent variant mirrors each change to a JSON file
//! so a restart keeps the user logged in.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::config::Config;

/// The token and user id of a logged-in user.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent with authenticated requests.
    pub token: String,
    /// Id of the logged-in user.
    pub user_id: String,
}

impl Session {
    /// Creates a session.
    #[must_use]
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
        }
    }
}

// Keep tokens out of logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Errors from persisting the session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading or writing the session file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The session file could not be (de)serialized.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shared handle to the current session.
#[derive(Clone, Default)]
pub struct SessionStore {
    current: Arc<RwLock<Option<Session>>>,
    path: Option<Arc<PathBuf>>,
}

impl SessionStore {
    /// Creates a store that lives only as long as the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Creates a store backed by the JSON file at `path`.
    ///
    /// A session already saved there is restored. A missing file means no
    /// session; an unreadable one is logged and ignored.
    #[must_use]
    pub fn persistent(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let restored = match Self::read(&path) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to restore session, starting logged out");
                None
            }
        };

        if restored.is_some() {
            tracing::info!(?path, "Restored session");
        }

        Self {
            current: Arc::new(RwLock::new(restored)),
            path: Some(Arc::new(path)),
        }
    }

    /// Opens the store at `<config dir>/myflix/session.json`.
    ///
    /// Falls back to an in-memory store if there is no config directory.
    #[must_use]
    pub fn open_default() -> Self {
        match Config::config_dir() {
            Some(dir) => Self::persistent(dir.join("session.json")),
            None => {
                tracing::warn!("Could not determine config directory, session will not persist");
                Self::in_memory()
            }
        }
    }

    /// Stores a new session, replacing any previous one.
    pub fn set(&self, token: impl Into<String>, user_id: impl Into<String>) {
        let session = Session::new(token, user_id);
        tracing::info!(user_id = %session.user_id, "Session started");

        *self.current.write() = Some(session.clone());

        if let Some(path) = &self.path {
            if let Err(e) = Self::write(path, &session) {
                tracing::warn!(path = ?path.as_path(), error = %e, "Failed to persist session");
            }
        }
    }

    /// Returns a copy of the current session, if any.
    #[must_use]
    pub fn get(&self) -> Option<Session> {
        self.current.read().clone()
    }

    /// Returns the current bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.current.read().as_ref().map(|s| s.token.clone())
    }

    /// Returns the current user id, if any.
    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        self.current.read().as_ref().map(|s| s.user_id.clone())
    }

    /// Returns true if a session is present.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.read().is_some()
    }

    /// Removes the session, including its persisted copy.
    pub fn clear(&self) {
        *self.current.write() = None;
        tracing::info!("Session cleared");

        if let Some(path) = &self.path {
            match fs::remove_file(path.as_path()) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = ?path.as_path(), error = %e, "Failed to remove session file");
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Option<Session>, SessionError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn write(path: &Path, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(session)?)?;
        Ok(())
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("current", &*self.current.read())
            .field("path", &self.path)
            .finish()
    }
}

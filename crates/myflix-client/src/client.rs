//! # API Client
//!
//! HTTP client for the MyFlix REST API.

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::{normalize, ApiResult, RequestError};
use crate::session::SessionStore;
use myflix_types::{
    Credentials, Director, Genre, LoginResponse, Movie, NewUser, UserProfile, UserUpdate,
};

/// HTTP client for the MyFlix API.
///
/// Authenticated methods read the bearer token from the [`SessionStore`]
/// on every call, so a login or logout is seen by the very next request.
/// The client is cheaply cloneable and can be shared across views.
///
/// # Examples
///
/// ```rust,ignore
/// use myflix_client::{ApiClient, Config, SessionStore};
///
/// let session = SessionStore::in_memory();
/// let client = ApiClient::new(Config::default().api_url()?, session.clone());
///
/// let login = client.login(&Credentials::new("alice", "secret")).await?;
/// session.set(login.token, login.user.id);
///
/// let movies = client.list_movies().await?;
/// println!("Found {} movies", movies.len());
/// ```
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
    session: SessionStore,
}

impl ApiClient {
    /// Creates a client for the API at `base_url`.
    #[must_use]
    pub fn new(base_url: Url, session: SessionStore) -> Self {
        Self {
            base_url,
            http: Client::new(),
            session,
        }
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the session this client authenticates with.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    // ==================== Accounts ====================

    /// Registers a new user account.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::ErrorKind::Status`] if the username is taken or
    /// a field is rejected by the API.
    pub async fn register(&self, user: &NewUser) -> ApiResult<UserProfile> {
        let result = async {
            let url = self.endpoint(&["users"])?;
            self.fetch(self.http.post(url).json(user)).await
        }
        .await;
        normalize("register", result)
    }

    /// Exchanges credentials for a token and the user record.
    ///
    /// Does not touch the session; storing the result is up to the caller.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::ErrorKind::Status`] on invalid credentials.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        let result = async {
            let url = self.endpoint(&["login"])?;
            self.fetch(self.http.post(url).json(credentials)).await
        }
        .await;
        normalize("login", result)
    }

    // ==================== Catalog ====================

    /// Lists every movie in the catalog.
    pub async fn list_movies(&self) -> ApiResult<Vec<Movie>> {
        let result = async {
            let url = self.endpoint(&["movies"])?;
            self.fetch(self.authorized(self.http.get(url))).await
        }
        .await;
        normalize("list_movies", result)
    }

    /// Gets one movie by title.
    pub async fn get_movie(&self, title: &str) -> ApiResult<Movie> {
        let result = async {
            let url = self.endpoint(&["movies", title])?;
            self.fetch(self.authorized(self.http.get(url))).await
        }
        .await;
        normalize("get_movie", result)
    }

    /// Gets a director by name.
    pub async fn get_director(&self, name: &str) -> ApiResult<Director> {
        let result = async {
            let url = self.endpoint(&["directors", name])?;
            self.fetch(self.authorized(self.http.get(url))).await
        }
        .await;
        normalize("get_director", result)
    }

    /// Gets a genre by name.
    pub async fn get_genre(&self, name: &str) -> ApiResult<Genre> {
        let result = async {
            let url = self.endpoint(&["genres", name])?;
            self.fetch(self.authorized(self.http.get(url))).await
        }
        .await;
        normalize("get_genre", result)
    }

    // ==================== Current User ====================

    /// Gets the profile of the logged-in user.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::ErrorKind::MissingSession`] without sending
    /// anything if the session has no user id.
    pub async fn get_current_user(&self) -> ApiResult<UserProfile> {
        let result = async {
            let user_id = self.user_id()?;
            let url = self.endpoint(&["users", &user_id])?;
            self.fetch(self.authorized(self.http.get(url))).await
        }
        .await;
        normalize("get_current_user", result)
    }

    /// Adds a movie to the user's favorites and returns the updated profile.
    pub async fn add_favorite(&self, movie_id: &str) -> ApiResult<UserProfile> {
        let result = async {
            let user_id = self.user_id()?;
            let url = self.endpoint(&["users", &user_id, "movies", movie_id])?;
            self.fetch(self.authorized(self.http.post(url))).await
        }
        .await;
        normalize("add_favorite", result)
    }

    /// Removes a movie from the user's favorites and returns the updated
    /// profile.
    pub async fn remove_favorite(&self, movie_id: &str) -> ApiResult<UserProfile> {
        let result = async {
            let user_id = self.user_id()?;
            let url = self.endpoint(&["users", &user_id, "movies", movie_id])?;
            self.fetch(self.authorized(self.http.delete(url))).await
        }
        .await;
        normalize("remove_favorite", result)
    }

    /// Updates the user's account and returns the stored record.
    pub async fn update_user(&self, update: &UserUpdate) -> ApiResult<UserProfile> {
        let result = async {
            let user_id = self.user_id()?;
            let url = self.endpoint(&["users", &user_id])?;
            self.fetch(self.authorized(self.http.put(url).json(update)))
                .await
        }
        .await;
        normalize("update_user", result)
    }

    /// Deletes the user's account.
    ///
    /// The session is left alone; clearing it is up to the caller.
    pub async fn delete_user(&self) -> ApiResult<()> {
        let result = async {
            let user_id = self.user_id()?;
            let url = self.endpoint(&["users", &user_id])?;
            // The API confirms with a plain-text body.
            self.send(self.authorized(self.http.delete(url)))
                .await
                .map(drop)
        }
        .await;
        normalize("delete_user", result)
    }

    // ==================== Plumbing ====================

    /// Builds `<base>/<segments...>`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, RequestError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RequestError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => {
                tracing::debug!("No session token, sending request unauthenticated");
                request
            }
        }
    }

    fn user_id(&self) -> Result<String, RequestError> {
        self.session.user_id().ok_or(RequestError::MissingSession)
    }

    /// Sends the request and returns the body of a 2xx response.
    async fn send(&self, request: RequestBuilder) -> Result<String, RequestError> {
        let res = request.send().await?;
        let status = res.status();
        tracing::debug!(url = %res.url(), status = status.as_u16(), "API response");

        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
                body: res.text().await.unwrap_or_default(),
            });
        }

        Ok(res.text().await?)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, RequestError> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| RequestError::MalformedResponse(e.to_string()))
    }
}

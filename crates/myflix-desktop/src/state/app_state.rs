//! Services created once at startup.

use myflix_client::ApiClient;

/// Global application state.
///
/// Handed to Dioxus at launch and read with `use_context::<AppState>()`.
/// Holds the API client, which in turn owns the session.
#[derive(Clone)]
pub struct AppState {
    client: ApiClient,
}

impl AppState {
    /// Creates the state around an API client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Returns a handle to the API client.
    #[must_use]
    pub fn client(&self) -> ApiClient {
        self.client.clone()
    }
}

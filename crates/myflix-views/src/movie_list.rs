//! # Movie List View
//!
//! The catalog page: all movies, the user's favorites, and the genre,
//! director and synopsis dialogs.
//!
//! Every async action comes in two halves. A `load_*`/`send_*` method
//! returns a future that owns what it needs, so the view can keep changing
//! while it runs. An `apply_*`/`show_*` method then writes only that
//! action's result back. The plain `async fn`s chain both halves.

use std::future::Future;

use myflix_types::{Director, Genre, Movie};

use crate::context::ViewContext;
use crate::messages::{FAVORITE_ADDED, FAVORITE_REMOVED};

/// Detail dialog opened from a movie card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieDialog {
    /// Genre name and description.
    Genre(Genre),
    /// Director name, bio and dates.
    Director(Director),
    /// A movie's synopsis.
    Synopsis {
        /// Movie title.
        title: String,
        /// Movie description.
        description: String,
    },
}

/// Outcome of one catalog load. A `None` half failed and was reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    movies: Option<Vec<Movie>>,
    favorites: Option<Vec<String>>,
}

/// State and actions of the movie list page.
///
/// Movies and favorites are a snapshot of the last successful fetch; every
/// favorite change refetches both instead of patching them locally.
#[derive(Debug, Clone)]
pub struct MovieListView {
    ctx: ViewContext,
    movies: Vec<Movie>,
    favorites: Vec<String>,
    dialog: Option<MovieDialog>,
    loaded: bool,
}

async fn fetch_catalog(ctx: ViewContext) -> Catalog {
    let client = ctx.client();
    let (movies, user) = futures::join!(client.list_movies(), client.get_current_user());

    let movies = match movies {
        Ok(movies) => {
            tracing::debug!(count = movies.len(), "Loaded movies");
            Some(movies)
        }
        Err(e) => {
            ctx.notify_error(&e);
            None
        }
    };

    let favorites = match user {
        Ok(user) => Some(user.favorite_movies),
        Err(e) => {
            ctx.notify_error(&e);
            None
        }
    };

    Catalog { movies, favorites }
}

async fn change_favorite(ctx: ViewContext, movie_id: String, add: bool) -> Option<Catalog> {
    let client = ctx.client();
    let result = if add {
        client.add_favorite(&movie_id).await
    } else {
        client.remove_favorite(&movie_id).await
    };

    match result {
        Ok(_) if add => {
            tracing::info!(%movie_id, "Added favorite");
            ctx.notify(FAVORITE_ADDED);
        }
        Ok(_) => {
            tracing::info!(%movie_id, "Removed favorite");
            ctx.notify(FAVORITE_REMOVED);
        }
        Err(e) => {
            ctx.notify_error(&e);
            return None;
        }
    }

    Some(fetch_catalog(ctx).await)
}

impl MovieListView {
    /// Creates an empty view. Call [`MovieListView::activate`] to load it.
    #[must_use]
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            movies: Vec::new(),
            favorites: Vec::new(),
            dialog: None,
            loaded: false,
        }
    }

    /// Fetches the catalog and the user's favorites.
    pub async fn activate(&mut self) {
        let catalog = self.load_catalog().await;
        self.apply_catalog(catalog);
    }

    /// Starts fetching the catalog and the user's favorites.
    ///
    /// Both requests run concurrently; a failure in one is reported to the
    /// user and does not affect the other.
    pub fn load_catalog(&self) -> impl Future<Output = Catalog> + 'static {
        fetch_catalog(self.ctx.clone())
    }

    /// Stores the halves of `catalog` that arrived. Failed halves keep the
    /// previous snapshot.
    pub fn apply_catalog(&mut self, catalog: Catalog) {
        if let Some(movies) = catalog.movies {
            self.movies = movies;
        }
        if let Some(favorites) = catalog.favorites {
            self.favorites = favorites;
        }
        self.loaded = true;
    }

    /// Movies from the last successful fetch.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Favorite movie ids from the last successful fetch.
    #[must_use]
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    /// Returns true once a catalog load has completed.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Returns true if `movie_id` is in the last fetched favorites.
    #[must_use]
    pub fn is_favorite(&self, movie_id: &str) -> bool {
        self.favorites.iter().any(|id| id == movie_id)
    }

    /// Adds `movie_id` to the favorites, then reloads the page.
    pub async fn add_favorite(&mut self, movie_id: &str) {
        if let Some(catalog) = self.send_add_favorite(movie_id).await {
            self.apply_catalog(catalog);
        }
    }

    /// Removes `movie_id` from the favorites, then reloads the page.
    pub async fn remove_favorite(&mut self, movie_id: &str) {
        if let Some(catalog) = self.send_remove_favorite(movie_id).await {
            self.apply_catalog(catalog);
        }
    }

    /// Adds or removes `movie_id` depending on its current membership.
    pub async fn toggle_favorite(&mut self, movie_id: &str) {
        if let Some(catalog) = self.send_toggle_favorite(movie_id).await {
            self.apply_catalog(catalog);
        }
    }

    /// Starts adding `movie_id` to the favorites.
    ///
    /// On success the user is told and the future resolves to a fresh
    /// catalog; on failure the error is reported and it resolves to `None`.
    pub fn send_add_favorite(
        &self,
        movie_id: &str,
    ) -> impl Future<Output = Option<Catalog>> + 'static {
        change_favorite(self.ctx.clone(), movie_id.to_string(), true)
    }

    /// Starts removing `movie_id` from the favorites. See
    /// [`MovieListView::send_add_favorite`].
    pub fn send_remove_favorite(
        &self,
        movie_id: &str,
    ) -> impl Future<Output = Option<Catalog>> + 'static {
        change_favorite(self.ctx.clone(), movie_id.to_string(), false)
    }

    /// Starts adding or removing `movie_id`, decided by the favorites
    /// shown right now.
    pub fn send_toggle_favorite(
        &self,
        movie_id: &str,
    ) -> impl Future<Output = Option<Catalog>> + 'static {
        let add = !self.is_favorite(movie_id);
        change_favorite(self.ctx.clone(), movie_id.to_string(), add)
    }

    /// The currently open dialog.
    #[must_use]
    pub fn dialog(&self) -> Option<&MovieDialog> {
        self.dialog.as_ref()
    }

    /// Opens the genre dialog for `name`.
    pub async fn open_genre(&mut self, name: &str) {
        let dialog = self.load_genre(name).await;
        self.show_dialog(dialog);
    }

    /// Opens the director dialog for `name`.
    pub async fn open_director(&mut self, name: &str) {
        let dialog = self.load_director(name).await;
        self.show_dialog(dialog);
    }

    /// Opens the synopsis dialog for the movie titled `title`.
    pub async fn open_synopsis(&mut self, title: &str) {
        let dialog = self.load_synopsis(title).await;
        self.show_dialog(dialog);
    }

    /// Starts fetching the genre dialog for `name`.
    pub fn load_genre(&self, name: &str) -> impl Future<Output = Option<MovieDialog>> + 'static {
        let ctx = self.ctx.clone();
        let name = name.to_string();
        async move {
            let result = ctx.client().get_genre(&name).await;
            result
                .map(MovieDialog::Genre)
                .map_err(|e| ctx.notify_error(&e))
                .ok()
        }
    }

    /// Starts fetching the director dialog for `name`.
    pub fn load_director(
        &self,
        name: &str,
    ) -> impl Future<Output = Option<MovieDialog>> + 'static {
        let ctx = self.ctx.clone();
        let name = name.to_string();
        async move {
            let result = ctx.client().get_director(&name).await;
            result
                .map(MovieDialog::Director)
                .map_err(|e| ctx.notify_error(&e))
                .ok()
        }
    }

    /// Starts fetching the synopsis dialog for the movie titled `title`.
    pub fn load_synopsis(
        &self,
        title: &str,
    ) -> impl Future<Output = Option<MovieDialog>> + 'static {
        let ctx = self.ctx.clone();
        let title = title.to_string();
        async move {
            let result = ctx.client().get_movie(&title).await;
            result
                .map(|movie| MovieDialog::Synopsis {
                    title: movie.title,
                    description: movie.description,
                })
                .map_err(|e| ctx.notify_error(&e))
                .ok()
        }
    }

    /// Shows `dialog` if its fetch succeeded. A failed fetch leaves the
    /// current dialog as it is.
    pub fn show_dialog(&mut self, dialog: Option<MovieDialog>) {
        if let Some(dialog) = dialog {
            self.dialog = Some(dialog);
        }
    }

    /// Closes the open dialog, if any.
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{movie_json, user_json, Harness};
    use myflix_client::GENERIC_ERROR_MESSAGE;
    use proptest::prelude::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_movies(server: &MockServer, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/movies"))
            .and(header("authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                movie_json("m1", "Alien"),
                movie_json("m2", "Heat")
            ])))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    async fn mount_user_once(server: &MockServer, favorites: &[&str]) {
        Mock::given(method("GET"))
            .and(path("/users/u1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json(favorites)))
            .up_to_n_times(1)
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_activate_loads_movies_and_favorites() {
        let mock_server = MockServer::start().await;
        mount_movies(&mock_server, 1).await;
        mount_user_once(&mock_server, &["m2"]).await;

        let harness = Harness::logged_in(&mock_server.uri());
        let mut view = MovieListView::new(harness.ctx.clone());
        assert!(!view.is_loaded());

        view.activate().await;

        assert!(view.is_loaded());
        assert_eq!(view.movies().len(), 2);
        assert!(view.is_favorite("m2"));
        assert!(!view.is_favorite("m1"));
        assert!(harness.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_user_fetch_keeps_favorites_unset() {
        let mock_server = MockServer::start().await;
        mount_movies(&mock_server, 1).await;

        Mock::given(method("GET"))
            .and(path("/users/u1"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&mock_server)
            .await;

        let harness = Harness::logged_in(&mock_server.uri());
        let mut view = MovieListView::new(harness.ctx.clone());
        view.activate().await;

        // Movies still arrive; only the failed half is left untouched.
        assert_eq!(view.movies().len(), 2);
        assert!(view.favorites().is_empty());
        assert_eq!(harness.notifier.messages(), vec![GENERIC_ERROR_MESSAGE]);
    }

    #[tokio::test]
    async fn test_failed_refetch_keeps_previous_snapshot() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/movies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                movie_json("m1", "Alien"),
                movie_json("m2", "Heat")
            ])))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        mount_user_once(&mock_server, &["m2"]).await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .expect(2)
            .mount(&mock_server)
            .await;

        let harness = Harness::logged_in(&mock_server.uri());
        let mut view = MovieListView::new(harness.ctx.clone());

        view.activate().await;
        view.activate().await;

        assert_eq!(view.movies().len(), 2);
        assert!(view.is_favorite("m2"));
        assert_eq!(
            harness.notifier.messages(),
            vec![GENERIC_ERROR_MESSAGE, GENERIC_ERROR_MESSAGE]
        );
    }

    #[tokio::test]
    async fn test_dialog_opened_while_loading_survives() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/movies"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([movie_json("m1", "Alien")]))
                    .set_delay(std::time::Duration::from_millis(200)),
            )
            .mount(&mock_server)
            .await;
        mount_user_once(&mock_server, &["m1"]).await;
        Mock::given(method("GET"))
            .and(path("/genres/Drama"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Name": "Drama",
                "Description": "Serious."
            })))
            .mount(&mock_server)
            .await;

        let harness = Harness::logged_in(&mock_server.uri());
        let mut view = MovieListView::new(harness.ctx.clone());

        let loading = view.load_catalog();
        let (catalog, ()) = futures::join!(loading, view.open_genre("Drama"));
        view.apply_catalog(catalog);

        assert!(matches!(view.dialog(), Some(MovieDialog::Genre(g)) if g.name == "Drama"));
        assert_eq!(view.movies().len(), 1);
        assert!(view.is_favorite("m1"));
    }

    #[tokio::test]
    async fn test_add_favorite_notifies_and_refetches() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users/u1/movies/m1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json(&["m1"])))
            .expect(1)
            .mount(&mock_server)
            .await;
        mount_movies(&mock_server, 1).await;
        mount_user_once(&mock_server, &["m1"]).await;

        let harness = Harness::logged_in(&mock_server.uri());
        let mut view = MovieListView::new(harness.ctx.clone());
        view.add_favorite("m1").await;

        assert_eq!(harness.notifier.messages(), vec![FAVORITE_ADDED]);
        assert!(view.is_favorite("m1"));
        assert_eq!(view.movies().len(), 2);
    }

    #[tokio::test]
    async fn test_add_then_remove_restores_membership() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users/u1/movies/m1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json(&["m2", "m1"])))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/users/u1/movies/m1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json(&["m2"])))
            .expect(1)
            .mount(&mock_server)
            .await;

        // One movies fetch per activation: initial, after add, after remove.
        mount_movies(&mock_server, 3).await;
        mount_user_once(&mock_server, &["m2"]).await;
        mount_user_once(&mock_server, &["m2", "m1"]).await;
        mount_user_once(&mock_server, &["m2"]).await;

        let harness = Harness::logged_in(&mock_server.uri());
        let mut view = MovieListView::new(harness.ctx.clone());

        view.activate().await;
        let before = view.favorites().to_vec();

        view.toggle_favorite("m1").await;
        assert!(view.is_favorite("m1"));

        view.toggle_favorite("m1").await;
        assert!(!view.is_favorite("m1"));
        assert_eq!(view.favorites(), before.as_slice());

        assert_eq!(
            harness.notifier.messages(),
            vec![FAVORITE_ADDED, FAVORITE_REMOVED]
        );
    }

    #[tokio::test]
    async fn test_failed_add_does_not_refetch() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users/u1/movies/m1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        mount_movies(&mock_server, 0).await;

        let harness = Harness::logged_in(&mock_server.uri());
        let mut view = MovieListView::new(harness.ctx.clone());
        view.add_favorite("m1").await;

        assert_eq!(harness.notifier.messages(), vec![GENERIC_ERROR_MESSAGE]);
        assert!(!view.is_favorite("m1"));
        assert!(!view.is_loaded());
    }

    #[tokio::test]
    async fn test_detail_dialogs() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/genres/Drama"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Name": "Drama",
                "Description": "Serious."
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/movies/Heat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(movie_json("m2", "Heat")))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/directors/Nobody"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Director not found"))
            .mount(&mock_server)
            .await;

        let harness = Harness::logged_in(&mock_server.uri());
        let mut view = MovieListView::new(harness.ctx.clone());

        view.open_genre("Drama").await;
        assert!(matches!(view.dialog(), Some(MovieDialog::Genre(g)) if g.description == "Serious."));

        view.open_synopsis("Heat").await;
        assert_eq!(
            view.dialog(),
            Some(&MovieDialog::Synopsis {
                title: "Heat".to_string(),
                description: "Heat synopsis.".to_string(),
            })
        );

        view.close_dialog();
        view.open_director("Nobody").await;
        assert!(view.dialog().is_none());
        assert_eq!(harness.notifier.messages(), vec![GENERIC_ERROR_MESSAGE]);
    }

    fn offline_view() -> MovieListView {
        MovieListView::new(Harness::new("http://127.0.0.1:9/").ctx)
    }

    proptest! {
        /// Property: a fresh view has no favorites, whatever the id
        #[test]
        fn prop_no_favorites_before_first_load(id in "[a-f0-9]{1,24}") {
            prop_assert!(!offline_view().is_favorite(&id));
        }

        /// Property: membership matches the last fetched favorites exactly
        #[test]
        fn prop_is_favorite_is_membership(
            favorites in prop::collection::vec("[a-f0-9]{4}", 0..10),
            candidate in "[a-f0-9]{4}"
        ) {
            let mut view = offline_view();
            view.favorites = favorites.clone();

            prop_assert_eq!(view.is_favorite(&candidate), favorites.contains(&candidate));
            for id in &favorites {
                prop_assert!(view.is_favorite(id));
            }
        }
    }
}

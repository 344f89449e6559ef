//! # Movie Card Component
//!
//! A single movie in the catalog grid.

use dioxus::prelude::*;

use myflix_types::Movie;

/// Movie card with poster, title and actions.
///
/// # Props
///
/// * `movie` - The movie to show
/// * `favorite` - Whether it is in the user's favorites
/// * `on_toggle` - Called with the movie id to add/remove it as favorite
/// * `on_genre` - Called with the genre name
/// * `on_director` - Called with the director name
/// * `on_synopsis` - Called with the movie title
#[component]
pub fn MovieCard(
    movie: Movie,
    favorite: bool,
    on_toggle: EventHandler<String>,
    on_genre: EventHandler<String>,
    on_director: EventHandler<String>,
    on_synopsis: EventHandler<String>,
) -> Element {
    let id = movie.id.clone();
    let genre = movie.genre.name.clone();
    let director = movie.director.name.clone();
    let title = movie.title.clone();

    let (toggle_class, toggle_label) = if favorite {
        ("btn-primary btn-sm", "♥ Favorite")
    } else {
        ("btn-ghost btn-sm", "♡ Favorite")
    };

    rsx! {
        div {
            class: "movie-card glass-panel",

            if let Some(src) = &movie.image_path {
                img {
                    class: "movie-poster",
                    src: "{src}",
                    alt: "{movie.title}",
                }
            }

            h3 { "{movie.title}" }
            p { class: "text-secondary", "Directed by: {movie.director.name}" }

            div {
                class: "btn-group",

                button {
                    class: "btn-glass btn-sm",
                    onclick: move |_| on_genre.call(genre.clone()),
                    "Genre"
                }

                button {
                    class: "btn-glass btn-sm",
                    onclick: move |_| on_director.call(director.clone()),
                    "Director"
                }

                button {
                    class: "btn-glass btn-sm",
                    onclick: move |_| on_synopsis.call(title.clone()),
                    "Synopsis"
                }

                button {
                    class: "{toggle_class}",
                    onclick: move |_| on_toggle.call(id.clone()),
                    "{toggle_label}"
                }
            }
        }
    }
}

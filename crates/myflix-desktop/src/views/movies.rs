//! # Movies View
//!
//! The movie catalog with favorites and detail dialogs.

use dioxus::prelude::*;

use myflix_types::Movie;
use myflix_views::{Catalog, MovieListView, ViewContext};

use super::run;
use crate::components::{MovieCard, MovieDetails};

/// Movie catalog page component.
#[component]
pub fn Movies() -> Element {
    let ctx = use_context::<ViewContext>();
    let mut view = use_signal(move || MovieListView::new(ctx));

    use_hook(move || {
        let request = view.peek().load_catalog();
        run(view, request, MovieListView::apply_catalog);
    });

    let (loaded, cards, dialog) = {
        let list = view.read();
        let cards: Vec<(Movie, bool)> = list
            .movies()
            .iter()
            .map(|movie| (movie.clone(), list.is_favorite(&movie.id)))
            .collect();
        (list.is_loaded(), cards, list.dialog().cloned())
    };

    rsx! {
        div { class: "movies-view",
            if !loaded {
                div { class: "loading-state",
                    div { class: "spinner" }
                    p { "Loading movies..." }
                }
            } else if cards.is_empty() {
                div { class: "empty-state",
                    p { "No movies found." }
                }
            } else {
                div { class: "movie-grid",
                    for (movie, favorite) in cards {
                        MovieCard {
                            key: "{movie.id}",
                            movie,
                            favorite,
                            on_toggle: move |id: String| {
                                let request = view.peek().send_toggle_favorite(&id);
                                run(view, request, refresh);
                            },
                            on_genre: move |name: String| {
                                let request = view.peek().load_genre(&name);
                                run(view, request, MovieListView::show_dialog);
                            },
                            on_director: move |name: String| {
                                let request = view.peek().load_director(&name);
                                run(view, request, MovieListView::show_dialog);
                            },
                            on_synopsis: move |title: String| {
                                let request = view.peek().load_synopsis(&title);
                                run(view, request, MovieListView::show_dialog);
                            },
                        }
                    }
                }
            }

            if let Some(dialog) = dialog {
                MovieDetails {
                    dialog,
                    on_close: move |_| view.write().close_dialog(),
                }
            }
        }
    }
}

/// Applies the catalog reloaded after a favorite change.
fn refresh(list: &mut MovieListView, catalog: Option<Catalog>) {
    if let Some(catalog) = catalog {
        list.apply_catalog(catalog);
    }
}

//! # Movie Details Component
//!
//! Modal for the genre, director and synopsis dialogs.

use dioxus::prelude::*;

use myflix_types::Director;
use myflix_views::MovieDialog;

/// Modal showing one [`MovieDialog`].
#[component]
pub fn MovieDetails(dialog: MovieDialog, on_close: EventHandler<()>) -> Element {
    let (heading, subtitle, body) = match &dialog {
        MovieDialog::Genre(genre) => (genre.name.clone(), None, genre.description.clone()),
        MovieDialog::Director(director) => (
            director.name.clone(),
            lifespan(director),
            director.bio.clone(),
        ),
        MovieDialog::Synopsis { title, description } => {
            (title.clone(), None, description.clone())
        }
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-content glass-panel",
                onclick: move |evt| evt.stop_propagation(),

                h3 { "{heading}" }

                if let Some(subtitle) = subtitle {
                    p { class: "text-tertiary", "{subtitle}" }
                }

                p { "{body}" }

                div {
                    class: "btn-group",

                    button {
                        class: "btn-primary",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}

fn lifespan(director: &Director) -> Option<String> {
    match (&director.birth, &director.death) {
        (Some(birth), Some(death)) => Some(format!("{birth} - {death}")),
        (Some(birth), None) => Some(format!("Born {birth}")),
        (None, Some(death)) => Some(format!("Died {death}")),
        (None, None) => None,
    }
}

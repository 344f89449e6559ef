//! # Profile View
//!
//! The user's profile with edit form and account deletion.

use dioxus::prelude::*;

use myflix_views::{ProfileView, ViewContext};

use super::run;

/// Profile page component.
#[component]
pub fn Profile() -> Element {
    let ctx = use_context::<ViewContext>();
    let mut view = use_signal(move || ProfileView::new(ctx));

    use_hook(move || {
        let request = view.peek().load_profile();
        run(view, request, ProfileView::apply_profile);
    });

    let (user, form, prompt) = {
        let profile = view.read();
        (
            profile.user().cloned(),
            profile.form.clone(),
            profile.delete_prompt(),
        )
    };

    rsx! {
        div { class: "profile-view",
            if let Some(user) = user {
                div { class: "profile-card glass-panel",
                    h2 { "{user.username}" }

                    dl { class: "profile-details",
                        dt { "Email" }
                        dd { "{user.email.clone().unwrap_or_default()}" }
                        dt { "Birthday" }
                        dd { "{user.birthday.clone().unwrap_or_default()}" }
                        dt { "Favorite movies" }
                        dd { "{user.favorite_movies.len()}" }
                    }
                }
            } else {
                div { class: "loading-state",
                    div { class: "spinner" }
                    p { "Loading profile..." }
                }
            }

            form {
                class: "profile-form glass-panel",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    let request = view.peek().send_update();
                    run(view, request, ProfileView::apply_update);
                },

                h3 { class: "section-label", "Update info" }

                div { class: "form-group",
                    label { r#for: "profile-username", "Username" }
                    input {
                        id: "profile-username",
                        r#type: "text",
                        value: "{form.username}",
                        oninput: move |evt| view.write().form.username = evt.value(),
                    }
                }

                div { class: "form-group",
                    label { r#for: "profile-password", "Password" }
                    input {
                        id: "profile-password",
                        r#type: "password",
                        value: "{form.password}",
                        oninput: move |evt| view.write().form.password = evt.value(),
                    }
                }

                div { class: "form-group",
                    label { r#for: "profile-email", "Email" }
                    input {
                        id: "profile-email",
                        r#type: "email",
                        value: "{form.email}",
                        oninput: move |evt| view.write().form.email = evt.value(),
                    }
                }

                div { class: "form-group",
                    label { r#for: "profile-birthday", "Birthday" }
                    input {
                        id: "profile-birthday",
                        r#type: "date",
                        value: "{form.birthday}",
                        oninput: move |evt| view.write().form.birthday = evt.value(),
                    }
                }

                div { class: "btn-group",
                    button {
                        class: "btn-primary",
                        r#type: "submit",
                        "Update"
                    }

                    button {
                        class: "btn-danger",
                        r#type: "button",
                        onclick: move |_| view.write().request_delete(),
                        "Delete profile"
                    }
                }
            }

            if let Some(prompt) = prompt {
                div { class: "modal-overlay",
                    div { class: "modal-content glass-panel",
                        h3 { "Delete profile" }
                        p { "{prompt}" }

                        div { class: "btn-group",
                            button {
                                class: "btn-ghost",
                                onclick: move |_| view.write().cancel_delete(),
                                "Cancel"
                            }

                            button {
                                class: "btn-danger",
                                onclick: move |_| {
                                    let request = view.write().send_delete();
                                    run(view, request, ProfileView::finish_delete);
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

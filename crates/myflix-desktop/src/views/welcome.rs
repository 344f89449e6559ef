//! # Welcome View
//!
//! Logged-out landing page with the login and registration forms.

use dioxus::prelude::*;

use myflix_views::{LoginView, RegistrationView, ViewContext};

use super::run;

/// Welcome page component.
///
/// Redirects to the catalog when a session is already active.
#[component]
pub fn Welcome() -> Element {
    let ctx = use_context::<ViewContext>();

    let mut login = use_signal({
        let ctx = ctx.clone();
        move || LoginView::new(ctx)
    });
    let mut registration = use_signal(move || RegistrationView::new(ctx));

    use_effect(move || {
        login.peek().redirect_if_logged_in();
    });

    let do_login = move || {
        let request = login.peek().send_login();
        run(login, request, LoginView::finish_login);
    };

    let do_register = move || {
        let request = registration.peek().send_registration();
        run(registration, request, RegistrationView::finish_registration);
    };

    let username = login.read().username.clone();
    let password = login.read().password.clone();
    let form = registration.read().form.clone();

    rsx! {
        div { class: "login-view",
            div { class: "login-card glass-panel",
                div { class: "login-header",
                    h1 { "MyFlix" }
                    p { class: "text-secondary", "Your movie catalog" }
                }

                form {
                    class: "login-form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        do_login();
                    },

                    h3 { class: "section-label", "Login" }

                    div { class: "form-group",
                        label { r#for: "login-username", "Username" }
                        input {
                            id: "login-username",
                            r#type: "text",
                            required: true,
                            value: "{username}",
                            oninput: move |evt| login.write().username = evt.value(),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "login-password", "Password" }
                        input {
                            id: "login-password",
                            r#type: "password",
                            required: true,
                            value: "{password}",
                            oninput: move |evt| login.write().password = evt.value(),
                        }
                    }

                    button {
                        class: "btn-primary btn-lg btn-block",
                        r#type: "submit",
                        "Login"
                    }
                }

                div { class: "divider",
                    span { "or create an account" }
                }

                form {
                    class: "login-form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        do_register();
                    },

                    h3 { class: "section-label", "Register" }

                    div { class: "form-group",
                        label { r#for: "register-username", "Username" }
                        input {
                            id: "register-username",
                            r#type: "text",
                            required: true,
                            value: "{form.username}",
                            oninput: move |evt| registration.write().form.username = evt.value(),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "register-password", "Password" }
                        input {
                            id: "register-password",
                            r#type: "password",
                            required: true,
                            value: "{form.password}",
                            oninput: move |evt| registration.write().form.password = evt.value(),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "register-email", "Email" }
                        input {
                            id: "register-email",
                            r#type: "email",
                            required: true,
                            value: "{form.email}",
                            oninput: move |evt| registration.write().form.email = evt.value(),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "register-birthday", "Birthday" }
                        input {
                            id: "register-birthday",
                            r#type: "date",
                            value: "{form.birthday}",
                            oninput: move |evt| registration.write().form.birthday = evt.value(),
                        }
                    }

                    button {
                        class: "btn-glass btn-lg btn-block",
                        r#type: "submit",
                        "Register"
                    }
                }
            }
        }
    }
}

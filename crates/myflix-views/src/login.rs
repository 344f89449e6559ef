//! # Login View
//!
//! The login form on the welcome page.

use std::future::Future;

use myflix_types::Credentials;

use crate::context::{Screen, ViewContext};
use crate::messages::LOGIN_SUCCESS;

/// Login form state and submission.
#[derive(Debug, Clone)]
pub struct LoginView {
    ctx: ViewContext,
    /// Username as typed.
    pub username: String,
    /// Password as typed.
    pub password: String,
}

impl LoginView {
    /// Creates an empty login form.
    #[must_use]
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            username: String::new(),
            password: String::new(),
        }
    }

    /// Sends an already logged-in user straight to the movie list.
    ///
    /// Returns true if a redirect happened.
    pub fn redirect_if_logged_in(&self) -> bool {
        if self.ctx.session().is_active() {
            self.ctx.navigate(Screen::Movies);
            true
        } else {
            false
        }
    }

    /// Submits the form.
    ///
    /// On success the session is stored, the user is told, and the movie
    /// list is shown. On failure the form is left filled in for a retry.
    /// Returns true on success.
    pub async fn submit(&mut self) -> bool {
        let logged_in = self.send_login().await;
        self.finish_login(logged_in);
        logged_in
    }

    /// Starts logging in with the credentials typed so far.
    ///
    /// The future stores the session and navigates on success and resolves
    /// to whether the login went through.
    pub fn send_login(&self) -> impl Future<Output = bool> + 'static {
        let ctx = self.ctx.clone();
        let credentials = Credentials::new(self.username.clone(), self.password.clone());

        async move {
            let result = ctx.client().login(&credentials).await;
            match result {
                Ok(resp) => {
                    tracing::info!(username = %resp.user.username, "Logged in");
                    ctx.session().set(resp.token, resp.user.id);
                    ctx.notify(LOGIN_SUCCESS);
                    ctx.navigate(Screen::Movies);
                    true
                }
                Err(e) => {
                    ctx.notify_error(&e);
                    false
                }
            }
        }
    }

    /// Clears the password after a successful login.
    pub fn finish_login(&mut self, logged_in: bool) {
        if logged_in {
            self.password.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{user_json, Harness};
    use myflix_client::{Session, GENERIC_ERROR_MESSAGE};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_stores_session_and_navigates() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(serde_json::json!({ "Username": "alice", "Password": "secret" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "abc",
                "user": user_json(&[])
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let harness = Harness::new(&mock_server.uri());
        let mut view = LoginView::new(harness.ctx.clone());
        view.username = "alice".to_string();
        view.password = "secret".to_string();

        assert!(view.submit().await);

        assert_eq!(harness.session.get(), Some(Session::new("abc", "u1")));
        assert_eq!(harness.navigator.screens(), vec![Screen::Movies]);
        assert_eq!(harness.notifier.messages(), vec![LOGIN_SUCCESS]);
        assert!(view.password.is_empty());
    }

    #[tokio::test]
    async fn test_token_from_login_is_used_afterwards() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "fresh-token",
                "user": user_json(&[])
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/movies"))
            .and(header("authorization", "Bearer fresh-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let harness = Harness::new(&mock_server.uri());
        let mut view = LoginView::new(harness.ctx.clone());
        view.username = "alice".to_string();
        view.password = "secret".to_string();
        view.submit().await;

        harness.ctx.client().list_movies().await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_login_keeps_form() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "message": "Incorrect username or password."
            })))
            .mount(&mock_server)
            .await;

        let harness = Harness::new(&mock_server.uri());
        let mut view = LoginView::new(harness.ctx.clone());
        view.username = "alice".to_string();
        view.password = "wrong".to_string();

        assert!(!view.submit().await);

        assert!(!harness.session.is_active());
        assert!(harness.navigator.screens().is_empty());
        assert_eq!(harness.notifier.messages(), vec![GENERIC_ERROR_MESSAGE]);
        assert_eq!(view.username, "alice");
        assert_eq!(view.password, "wrong");
    }

    #[test]
    fn test_redirect_only_with_session() {
        let harness = Harness::new("http://127.0.0.1:9/");
        let view = LoginView::new(harness.ctx.clone());

        assert!(!view.redirect_if_logged_in());
        assert!(harness.navigator.screens().is_empty());

        harness.session.set("abc", "u1");
        assert!(view.redirect_if_logged_in());
        assert_eq!(harness.navigator.screens(), vec![Screen::Movies]);
    }
}

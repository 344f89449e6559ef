//! # Registration View
//!
//! The sign-up form on the welcome page.

use std::future::Future;

use myflix_types::NewUser;

use crate::context::ViewContext;
use crate::messages::REGISTRATION_SUCCESS;

/// Registration form state and submission.
#[derive(Debug, Clone)]
pub struct RegistrationView {
    ctx: ViewContext,
    /// Form fields, sent as-is.
    pub form: NewUser,
}

impl RegistrationView {
    /// Creates an empty registration form.
    #[must_use]
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            form: NewUser::default(),
        }
    }

    /// Submits the form.
    ///
    /// Registration does not log the user in. On success the form is
    /// cleared; on failure it is kept. Returns true on success.
    pub async fn submit(&mut self) -> bool {
        let registered = self.send_registration().await;
        self.finish_registration(registered);
        registered
    }

    /// Starts registering the form as filled in now. Resolves to whether
    /// the account was created.
    pub fn send_registration(&self) -> impl Future<Output = bool> + 'static {
        let ctx = self.ctx.clone();
        let form = self.form.clone();

        async move {
            let result = ctx.client().register(&form).await;
            match result {
                Ok(user) => {
                    tracing::info!(username = %user.username, "Registered");
                    ctx.notify(REGISTRATION_SUCCESS);
                    true
                }
                Err(e) => {
                    ctx.notify_error(&e);
                    false
                }
            }
        }
    }

    /// Resets the form after a successful registration.
    pub fn finish_registration(&mut self, registered: bool) {
        if registered {
            self.form = NewUser::default();
        }
    }
}

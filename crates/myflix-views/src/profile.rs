//! # Profile View
//!
//! The profile page: account details, the edit form and account deletion.

use std::future::Future;

use myflix_types::{UserProfile, UserUpdate};

use crate::context::{Screen, ViewContext};
use crate::messages::{DELETE_PROFILE_PROMPT, PROFILE_DELETED, PROFILE_UPDATED};

/// Edit form on the profile page. Blank fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    /// New username.
    pub username: String,
    /// New password.
    pub password: String,
    /// New email.
    pub email: String,
    /// New birthday.
    pub birthday: String,
}

impl ProfileForm {
    /// Converts the form into an update body.
    #[must_use]
    pub fn to_update(&self) -> UserUpdate {
        UserUpdate::from_form(&self.username, &self.password, &self.email, &self.birthday)
    }
}

/// Outcome of sending the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileUpdate {
    /// The API refused the update; the error was reported.
    Rejected,
    /// The update was stored. Holds the refetched profile unless that
    /// fetch failed.
    Applied(Option<UserProfile>),
}

/// State and actions of the profile page.
#[derive(Debug, Clone)]
pub struct ProfileView {
    ctx: ViewContext,
    user: Option<UserProfile>,
    /// The edit form.
    pub form: ProfileForm,
    pending_delete: bool,
}

impl ProfileView {
    /// Creates an empty view. Call [`ProfileView::activate`] to load it.
    #[must_use]
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            user: None,
            form: ProfileForm::default(),
            pending_delete: false,
        }
    }

    /// Fetches the current user's profile.
    pub async fn activate(&mut self) {
        let user = self.load_profile().await;
        self.apply_profile(user);
    }

    /// Starts fetching the current user's profile. Failures are reported
    /// and resolve to `None`.
    pub fn load_profile(&self) -> impl Future<Output = Option<UserProfile>> + 'static {
        fetch_profile(self.ctx.clone())
    }

    /// Shows `user` if its fetch succeeded; otherwise keeps the profile
    /// already shown.
    pub fn apply_profile(&mut self, user: Option<UserProfile>) {
        if let Some(user) = user {
            self.user = Some(user);
        }
    }

    /// The last successfully fetched profile.
    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Sends the edit form.
    ///
    /// On success the form is cleared and the profile refetched. On
    /// failure the previously shown profile stays.
    pub async fn update_user_info(&mut self) {
        let outcome = self.send_update().await;
        self.apply_update(outcome);
    }

    /// Starts sending the edit form as filled in now.
    pub fn send_update(&self) -> impl Future<Output = ProfileUpdate> + 'static {
        let ctx = self.ctx.clone();
        let update = self.form.to_update();

        async move {
            let result = ctx.client().update_user(&update).await;
            match result {
                Ok(_) => {
                    tracing::info!("Profile updated");
                    ctx.notify(PROFILE_UPDATED);
                    ProfileUpdate::Applied(fetch_profile(ctx).await)
                }
                Err(e) => {
                    ctx.notify_error(&e);
                    ProfileUpdate::Rejected
                }
            }
        }
    }

    /// Clears the form after an accepted update and shows the refetched
    /// profile.
    pub fn apply_update(&mut self, outcome: ProfileUpdate) {
        if let ProfileUpdate::Applied(user) = outcome {
            self.form = ProfileForm::default();
            self.apply_profile(user);
        }
    }

    /// Asks for confirmation before deleting the profile.
    pub fn request_delete(&mut self) {
        self.pending_delete = true;
    }

    /// Returns the confirmation prompt while a delete awaits confirmation.
    #[must_use]
    pub fn delete_prompt(&self) -> Option<&'static str> {
        self.pending_delete.then_some(DELETE_PROFILE_PROMPT)
    }

    /// Dismisses the confirmation prompt.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = false;
    }

    /// Deletes the profile once the user has confirmed.
    ///
    /// Does nothing unless [`ProfileView::request_delete`] was called first.
    /// The session is cleared, the user is told, and the welcome page is
    /// shown only after the API confirms the deletion; on failure the
    /// session is kept.
    pub async fn confirm_delete(&mut self) {
        let deleted = self.send_delete().await;
        self.finish_delete(deleted);
    }

    /// Closes the prompt and starts the delete if it was confirmed.
    /// Resolves to whether the account is gone.
    pub fn send_delete(&mut self) -> impl Future<Output = bool> + 'static {
        let confirmed = std::mem::take(&mut self.pending_delete);
        let ctx = self.ctx.clone();

        async move {
            if !confirmed {
                return false;
            }

            let result = ctx.client().delete_user().await;
            match result {
                Ok(()) => {
                    tracing::info!("Profile deleted");
                    ctx.session().clear();
                    ctx.navigate(Screen::Welcome);
                    ctx.notify(PROFILE_DELETED);
                    true
                }
                Err(e) => {
                    ctx.notify_error(&e);
                    false
                }
            }
        }
    }

    /// Forgets the shown profile once the account is deleted.
    pub fn finish_delete(&mut self, deleted: bool) {
        if deleted {
            self.user = None;
        }
    }
}

async fn fetch_profile(ctx: ViewContext) -> Option<UserProfile> {
    let result = ctx.client().get_current_user().await;
    match result {
        Ok(user) => Some(user),
        Err(e) => {
            ctx.notify_error(&e);
            None
        }
    }
}

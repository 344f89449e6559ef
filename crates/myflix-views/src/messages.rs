//! User-facing notification texts.

/// Shown after a successful login.
pub const LOGIN_SUCCESS: &str = "Login successful!";

/// Shown after a successful registration.
pub const REGISTRATION_SUCCESS: &str = "User registration successful!";

/// Shown after a movie was added to the favorites.
pub const FAVORITE_ADDED: &str = "Movie added to favorites";

/// Shown after a movie was removed from the favorites.
pub const FAVORITE_REMOVED: &str = "Movie deleted from favorites";

/// Shown after the profile was updated.
pub const PROFILE_UPDATED: &str = "Successfully updated user info!";

/// Shown after the profile was deleted.
pub const PROFILE_DELETED: &str = "Profile successfully deleted";

/// Confirmation prompt before deleting the profile.
pub const DELETE_PROFILE_PROMPT: &str =
    "Are you sure you want to delete your profile? All data will be lost.";

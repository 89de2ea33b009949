//! Client-side validation failures.

use thiserror::Error;

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A form was incomplete or inconsistent. Detected before any call is made;
/// the display text is the message shown next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Login without email or password.
    #[error("Please enter both email and password")]
    MissingCredentials,
    /// Sign-up with an empty field.
    #[error("All fields are required")]
    MissingSignupFields,
    /// Sign-up password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,
    /// Sign-up password shorter than [`MIN_PASSWORD_LENGTH`].
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    /// Task without a name.
    #[error("Task name is required")]
    MissingTaskName,
    /// Task without a team.
    #[error("Please select a team")]
    MissingTeam,
    /// Task without a project.
    #[error("Please select a project")]
    MissingProject,
    /// Task without owners.
    #[error("Please select at least one owner")]
    MissingOwner,
    /// Team without a name.
    #[error("Team name is required")]
    MissingTeamName,
    /// Project without a name.
    #[error("Project name is required")]
    MissingProjectName,
    /// Password change whose confirmation differs.
    #[error("New passwords do not match")]
    NewPasswordMismatch,
    /// Password change shorter than [`MIN_PASSWORD_LENGTH`].
    #[error("New password must be at least 6 characters long")]
    NewPasswordTooShort,
    /// Member addition without a user.
    #[error("Please select a user to add")]
    MissingMember,
}

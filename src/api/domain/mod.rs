//! Domain model for API calls.

mod account;
mod auth;
mod drafts;
pub mod routes;
mod validation;

pub use account::{
    PasswordChangeForm, PasswordChangePayload, ProfileForm, ProfileUpdate, data_export_file_name,
};
pub use auth::{AuthGrant, LoginForm, LoginPayload, SignupForm, SignupPayload};
pub use drafts::{
    DEFAULT_TIME_TO_COMPLETE, MemberPayload, ProjectDraft, ProjectPayload, TaskDraft, TaskPayload,
    TeamDraft, TeamPayload,
};
pub use validation::{MIN_PASSWORD_LENGTH, ValidationError};

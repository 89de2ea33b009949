//! Endpoint client and sign-in flow.

mod auth;
mod client;

pub use auth::{AuthError, AuthFlow, AuthService};
pub use client::{ApiError, ApiResult, WorkasanaApi};

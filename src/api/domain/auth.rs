//! Sign-in and sign-up forms and the credential grant.

use super::{MIN_PASSWORD_LENGTH, ValidationError};
use crate::reference::domain::RawUser;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Login form contents.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LoginForm {
    /// Checks both fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCredentials`] when either is empty.
    pub fn validate(&self) -> Result<LoginPayload, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(LoginPayload {
            email: email.to_owned(),
            password: self.password.clone(),
        })
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Sign-up form contents.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password confirmation.
    pub confirm_password: String,
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl SignupForm {
    /// Checks presence, confirmation and minimum length, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingSignupFields`],
    /// [`ValidationError::PasswordMismatch`] or
    /// [`ValidationError::PasswordTooShort`].
    pub fn validate(&self) -> Result<SignupPayload, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty()
            || email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ValidationError::MissingSignupFields);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(SignupPayload {
            name: name.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
        })
    }
}

/// Body of `POST /auth/signup`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignupPayload {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Response of a successful credential exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthGrant {
    /// Bearer token; blank when the server granted nothing.
    #[serde(default)]
    pub token: String,
    /// Signed-in user's profile.
    #[serde(default)]
    pub user: RawUser,
}

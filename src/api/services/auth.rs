//! Credential exchange and session establishment.

use crate::api::domain::{
    AuthGrant, LoginForm, PasswordChangeForm, ProfileForm, SignupForm, ValidationError, routes,
};
use crate::gateway::{
    domain::{ApiRequest, GatewayError, RequestFailure},
    ports::HttpTransport,
    services::AuthenticatedGateway,
};
use crate::reference::{
    domain::{RawUser, User},
    services::ReferenceNormalizer,
};
use crate::session::{domain::BearerToken, ports::SessionStore, services::SessionError};
use thiserror::Error;

/// Which account call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFlow {
    /// `POST /auth/login`.
    Login,
    /// `POST /auth/signup`.
    Signup,
    /// `PUT /auth/me` or `PUT /auth/change-password`.
    ProfileUpdate,
    /// `DELETE /auth/account`.
    AccountDeletion,
}

impl AuthFlow {
    /// Message shown when the server gives no reason.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Login => "Login failed. Please try again.",
            Self::Signup => "Signup failed. Please try again.",
            Self::ProfileUpdate => "Failed to update profile. Please try again.",
            Self::AccountDeletion => "Failed to delete account. Please try again.",
        }
    }
}

/// Errors from signing in or out and from account changes.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The form was rejected locally; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The exchange was refused or failed.
    #[error("{flow:?} failed: {source}")]
    Rejected {
        /// Failed exchange.
        flow: AuthFlow,
        /// Underlying failure.
        source: GatewayError,
    },
    /// The server answered without a usable token.
    #[error("{0:?} response carried no token")]
    MissingToken(AuthFlow),
    /// Session state could not be written.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AuthError {
    /// Returns the message to show on the form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Rejected {
                flow,
                source: GatewayError::RequestFailed(failure),
            } => failure.message_or(flow.failure_message()).to_owned(),
            Self::Rejected { flow, .. } | Self::MissingToken(flow) => {
                flow.failure_message().to_owned()
            }
            Self::Session(_) => AuthFlow::Login.failure_message().to_owned(),
        }
    }
}

/// Sign-in, sign-up and sign-out against the session the gateway reads.
pub struct AuthService<T, S>
where
    T: HttpTransport,
    S: SessionStore,
{
    gateway: AuthenticatedGateway<T, S>,
}

impl<T, S> AuthService<T, S>
where
    T: HttpTransport,
    S: SessionStore,
{
    /// Creates the service over `gateway`.
    #[must_use]
    pub const fn new(gateway: AuthenticatedGateway<T, S>) -> Self {
        Self { gateway }
    }

    /// Validates `form`, exchanges it for a credential and stores the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] before any call, or the failure of
    /// the exchange or of storing the session.
    pub async fn login(&self, form: &LoginForm) -> Result<User, AuthError> {
        let payload = form.validate()?;
        let request = routes::login(&payload)
            .map_err(|err| Self::encoding_failure(AuthFlow::Login, &err))?;
        self.exchange(AuthFlow::Login, request).await
    }

    /// Validates `form`, registers the account and stores the session.
    ///
    /// # Errors
    ///
    /// See [`AuthService::login`].
    pub async fn signup(&self, form: &SignupForm) -> Result<User, AuthError> {
        let payload = form.validate()?;
        let request = routes::signup(&payload)
            .map_err(|err| Self::encoding_failure(AuthFlow::Signup, &err))?;
        self.exchange(AuthFlow::Signup, request).await
    }

    /// Clears the credential and profile. Preferences are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Session`] when the store fails.
    pub fn sign_out(&self) -> Result<(), AuthError> {
        Ok(self.gateway.session().sign_out()?)
    }

    /// Sends the changed profile fields and caches the returned profile.
    ///
    /// Returns the updated user, or `None` when nothing changed and no call
    /// was made.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] when the update fails, or
    /// [`AuthError::Session`] when the profile cannot be cached.
    pub async fn update_profile(
        &self,
        form: &ProfileForm,
        current: &User,
    ) -> Result<Option<User>, AuthError> {
        let flow = AuthFlow::ProfileUpdate;
        let Some(update) = form.changes(current) else {
            return Ok(None);
        };
        let request =
            routes::update_profile(&update).map_err(|err| Self::encoding_failure(flow, &err))?;
        let updated: RawUser = self
            .gateway
            .fetch_json(request)
            .await
            .map_err(|source| AuthError::Rejected { flow, source })?;
        self.gateway.session().update_user(&updated)?;
        Ok(Some(ReferenceNormalizer::user(&updated)))
    }

    /// Validates `form` and changes the password.
    ///
    /// Returns `false` when the form asked for no change and no call was
    /// made.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] before any call, or
    /// [`AuthError::Rejected`] when the change fails.
    pub async fn change_password(&self, form: &PasswordChangeForm) -> Result<bool, AuthError> {
        let flow = AuthFlow::ProfileUpdate;
        let Some(payload) = form.validate()? else {
            return Ok(false);
        };
        let request =
            routes::change_password(&payload).map_err(|err| Self::encoding_failure(flow, &err))?;
        self.gateway
            .send(request)
            .await
            .map_err(|source| AuthError::Rejected { flow, source })?;
        Ok(true)
    }

    /// Deletes the account, then clears the credential and profile.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] when the deletion fails; the session
    /// is then left as the gateway left it.
    pub async fn delete_account(&self) -> Result<(), AuthError> {
        let flow = AuthFlow::AccountDeletion;
        self.gateway
            .send(routes::delete_account())
            .await
            .map_err(|source| AuthError::Rejected { flow, source })?;
        self.gateway.session().sign_out()?;
        tracing::info!("account deleted");
        Ok(())
    }

    async fn exchange(&self, flow: AuthFlow, request: ApiRequest) -> Result<User, AuthError> {
        let grant: AuthGrant = self
            .gateway
            .fetch_json(request)
            .await
            .map_err(|source| AuthError::Rejected { flow, source })?;
        let token = BearerToken::new(grant.token).ok_or(AuthError::MissingToken(flow))?;
        self.gateway.session().sign_in(&token, &grant.user)?;
        Ok(ReferenceNormalizer::user(&grant.user))
    }

    fn encoding_failure(flow: AuthFlow, err: &serde_json::Error) -> AuthError {
        AuthError::Rejected {
            flow,
            source: RequestFailure::decode(err).into(),
        }
    }
}

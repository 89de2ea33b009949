//! Explicit session context passed to the gateway and fetchers.

use crate::reference::{
    domain::{RawUser, User},
    services::ReferenceNormalizer,
};
use crate::session::{
    domain::{BearerToken, DisplayPreferences, SessionKey},
    ports::{SessionStore, SessionStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by session context operations.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] SessionStoreError),
    /// A value could not be serialized for storage.
    #[error("failed to serialize session value: {0}")]
    Serialization(Arc<serde_json::Error>),
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(Arc::new(err))
    }
}

/// Result type for session context operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Session credential, cached profile and preferences.
///
/// Screens treat the context as read-only. The only writers are the
/// sign-in/sign-out flow and the gateway's [`SessionContext::evict`]
/// transition.
pub struct SessionContext<S>
where
    S: SessionStore,
{
    store: Arc<S>,
}

impl<S> Clone for SessionContext<S>
where
    S: SessionStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> SessionContext<S>
where
    S: SessionStore,
{
    /// Creates a session context over the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Reads a raw session value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the store fails.
    pub fn get(&self, key: SessionKey) -> SessionResult<Option<String>> {
        Ok(self.store.get(key)?)
    }

    /// Writes a raw session value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the store fails.
    pub fn set(&self, key: SessionKey, value: impl Into<String>) -> SessionResult<()> {
        Ok(self.store.set(key, value.into())?)
    }

    /// Removes a raw session value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the store fails.
    pub fn clear(&self, key: SessionKey) -> SessionResult<()> {
        Ok(self.store.remove(key)?)
    }

    /// Returns the stored bearer credential, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the store fails.
    pub fn token(&self) -> SessionResult<Option<BearerToken>> {
        Ok(self.get(SessionKey::Token)?.and_then(BearerToken::new))
    }

    /// Returns `true` when a credential is stored.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the store fails.
    pub fn is_authenticated(&self) -> SessionResult<bool> {
        Ok(self.token()?.is_some())
    }

    /// Returns the cached user profile.
    ///
    /// A stored profile that fails to decode, or that has no identifier, is
    /// treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the store fails.
    pub fn current_user(&self) -> SessionResult<Option<User>> {
        let Some(payload) = self.get(SessionKey::User)? else {
            return Ok(None);
        };
        match serde_json::from_str::<RawUser>(&payload) {
            Ok(raw) if !raw.id.trim().is_empty() => Ok(Some(ReferenceNormalizer::user(&raw))),
            Ok(_) => Ok(None),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring undecodable cached user profile");
                Ok(None)
            }
        }
    }

    /// Stores a credential and profile after a successful sign-in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when serialization or the store fails.
    pub fn sign_in(&self, token: &BearerToken, user: &RawUser) -> SessionResult<()> {
        let profile = serde_json::to_string(user)?;
        self.set(SessionKey::Token, token.expose())?;
        self.set(SessionKey::User, profile)?;
        tracing::info!(
            token = %token.fingerprint(),
            user_id = %user.id,
            "session established"
        );
        Ok(())
    }

    /// Replaces the cached profile after the user edited it. The credential
    /// is left as it is.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when serialization or the store fails.
    pub fn update_user(&self, user: &RawUser) -> SessionResult<()> {
        let profile = serde_json::to_string(user)?;
        self.set(SessionKey::User, profile)?;
        tracing::debug!(user_id = %user.id, "cached profile replaced");
        Ok(())
    }

    /// Removes the credential and profile at the user's request.
    ///
    /// Preferences are kept.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the store fails.
    pub fn sign_out(&self) -> SessionResult<()> {
        self.remove_credentials()?;
        tracing::info!("session signed out");
        Ok(())
    }

    /// Clears the credential and profile after an authorization failure.
    ///
    /// Both keys are attempted even when the first removal fails; the first
    /// failure is returned. Preferences are kept.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the store fails.
    pub fn evict(&self) -> SessionResult<()> {
        self.remove_credentials()
    }

    fn remove_credentials(&self) -> SessionResult<()> {
        let token_removal = self.clear(SessionKey::Token);
        let user_removal = self.clear(SessionKey::User);
        token_removal.and(user_removal)
    }

    /// Loads display preferences, falling back to defaults when absent or
    /// undecodable.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the store fails.
    pub fn preferences(&self) -> SessionResult<DisplayPreferences> {
        let Some(payload) = self.get(SessionKey::UserPreferences)? else {
            return Ok(DisplayPreferences::default());
        };
        Ok(serde_json::from_str(&payload).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring undecodable display preferences");
            DisplayPreferences::default()
        }))
    }

    /// Persists display preferences.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when serialization or the store fails.
    pub fn save_preferences(&self, preferences: &DisplayPreferences) -> SessionResult<()> {
        let payload = serde_json::to_string(preferences)?;
        self.set(SessionKey::UserPreferences, payload)
    }
}

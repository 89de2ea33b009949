//! Key/value store port backing the session context.

use crate::session::domain::SessionKey;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Process-wide key/value storage for session state.
///
/// Operations are synchronous: session state is only read or written between
/// suspension points, never across one.
pub trait SessionStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Backend`] when the storage backend fails.
    fn get(&self, key: SessionKey) -> SessionStoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Backend`] when the storage backend fails.
    fn set(&self, key: SessionKey, value: String) -> SessionStoreResult<()>;

    /// Removes the value stored under `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Backend`] when the storage backend fails.
    fn remove(&self, key: SessionKey) -> SessionStoreResult<()>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// Storage backend failure.
    #[error("session store error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a storage backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}

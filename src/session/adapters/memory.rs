//! In-memory session store.

use crate::session::{
    domain::SessionKey,
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory session store.
///
/// Clones share the same underlying map, so a clone handed to a test can
/// observe writes made by the session context.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    state: Arc<RwLock<HashMap<SessionKey, String>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given entries.
    #[must_use]
    pub fn with_entries(entries: impl IntoIterator<Item = (SessionKey, String)>) -> Self {
        Self {
            state: Arc::new(RwLock::new(entries.into_iter().collect())),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: SessionKey) -> SessionStoreResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| SessionStoreError::backend(std::io::Error::other(err.to_string())))?;
        Ok(state.get(&key).cloned())
    }

    fn set(&self, key: SessionKey, value: String) -> SessionStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SessionStoreError::backend(std::io::Error::other(err.to_string())))?;
        state.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> SessionStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SessionStoreError::backend(std::io::Error::other(err.to_string())))?;
        state.remove(&key);
        Ok(())
    }
}

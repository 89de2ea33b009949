//! Port contracts for session state.

mod store;

pub use store::{SessionStore, SessionStoreError, SessionStoreResult};

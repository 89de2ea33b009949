//! Domain model for session state.

mod credential;
mod key;
mod preferences;

pub use credential::BearerToken;
pub use key::SessionKey;
pub use preferences::{DisplayPreferences, Theme};

//! Keys of the session key/value contract.

use std::fmt;

/// Keys the session context reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    /// Opaque bearer credential; present iff authenticated.
    Token,
    /// JSON-serialized user profile; mirrors the token lifecycle.
    User,
    /// JSON-serialized display preferences; survives eviction.
    UserPreferences,
}

impl SessionKey {
    /// Returns the storage key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::User => "user",
            Self::UserPreferences => "userPreferences",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

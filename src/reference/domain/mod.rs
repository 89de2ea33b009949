//! Domain model for reference normalization.
//!
//! Raw wire shapes are deliberately permissive: a record that is missing or
//! mistypes a relationship field still deserializes, and the normalizer
//! decides what placeholder stands in for it.

mod canonical;
mod entity;
mod error;
mod index;
mod raw;

pub use canonical::{CanonicalRef, RefKind, TagRef, UNRESOLVED_DISPLAY_NAME};
pub use entity::{Priority, Project, Task, TaskStatus, Team, User};
pub use error::{ParsePriorityError, ParseTaskStatusError};
pub use index::ReferenceIndex;
pub use raw::{EmbeddedEntity, RawProject, RawRef, RawTag, RawTask, RawTeam, RawUser};

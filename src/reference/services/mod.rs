//! Normalization services for raw remote records.

mod normalizer;

pub use normalizer::{ReferenceNormalizer, parse_timestamp};

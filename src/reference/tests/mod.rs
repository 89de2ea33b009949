//! Unit tests for reference normalization.

//! Unit tests for report aggregation.

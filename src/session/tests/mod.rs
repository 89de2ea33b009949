//! Unit tests for the session module.

mod context_tests;

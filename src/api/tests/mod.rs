//! Unit tests for endpoints, drafts and the sign-in flow.

mod client_tests;

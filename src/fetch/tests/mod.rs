//! Unit tests for batch fetching.

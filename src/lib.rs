//! Cross-crate integration tests for Fibonacci Studio.
//!
//! The test suites live in `tests/`; this crate has no public API.

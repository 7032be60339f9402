//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks instead of mockall: they are explicit, easy to debug, and
//! return exactly what the test configured.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Manual mocks are more explicit than macro-generated ones and let tests
//! control exactly what each store returns or whether it fails.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

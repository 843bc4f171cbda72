//! Test utilities
//!
//! In-memory port implementations and fixture factories shared by unit
//! and scenario tests.

pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

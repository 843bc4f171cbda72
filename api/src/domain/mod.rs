//! Domain layer
//!
//! Pure domain models and the port traits they depend on.

pub mod entities;
pub mod ports;

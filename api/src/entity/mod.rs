//! SeaORM entities
//!
//! Database-facing models, converted to domain entities at the adapter
//! boundary.

pub mod reviews;

//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod review;

pub use review::{NewReview, Review, ReviewId, ReviewStatus};

//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{NewReview, Review, ReviewId, ReviewStatus};
use crate::error::DomainError;

/// Repository for Review entities
///
/// The surface is deliberately narrow: point fetch, filtered listing,
/// server-side aggregation, create, and an explicit save for mutations.
/// No caching happens at this layer.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find a review by ID
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, DomainError>;

    /// List reviews for an entity with the given status, in insertion
    /// order, skipping `offset` matches and returning at most `limit`.
    ///
    /// `limit` and `offset` are non-negative; callers bound `limit` to
    /// sane values.
    async fn find_by_entity(
        &self,
        entity_id: &str,
        entity_type: &str,
        status: ReviewStatus,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, DomainError>;

    /// Arithmetic mean of `rating` over published reviews of an entity.
    ///
    /// Returns `0.0` when no published reviews exist - callers cannot
    /// distinguish "no reviews" from "average is zero" through this call.
    async fn average_published_rating(
        &self,
        entity_id: &str,
        entity_type: &str,
    ) -> Result<f64, DomainError>;

    /// Create a new review with a generated id and `Moderation` status
    async fn create(&self, review: &NewReview) -> Result<Review, DomainError>;

    /// Persist in-place mutation of a previously fetched review
    async fn save(&self, review: &Review) -> Result<(), DomainError>;
}

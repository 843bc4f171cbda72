//! Review service
//!
//! Owns the review lifecycle (moderation -> published/rejected), enforces
//! ownership on updates, and fronts listing/rating reads with a
//! time-bounded read-through cache.
//!
//! Consistency model: writes never populate or invalidate the cache, so
//! reads may be stale for up to one TTL after any mutation. Cache
//! failures propagate - there is no skip-the-cache fallback.

use std::sync::Arc;

use crate::domain::entities::{NewReview, Review, ReviewId, ReviewStatus};
use crate::domain::ports::{ReviewCache, ReviewRepository};
use crate::error::{AppError, DomainError};

/// Service for managing reviews
pub struct ReviewService<RR, C>
where
    RR: ReviewRepository,
    C: ReviewCache,
{
    reviews: Arc<RR>,
    cache: Arc<C>,
    cache_ttl_secs: u64,
}

impl<RR, C> ReviewService<RR, C>
where
    RR: ReviewRepository,
    C: ReviewCache,
{
    pub fn new(reviews: Arc<RR>, cache: Arc<C>, cache_ttl_secs: u64) -> Self {
        Self {
            reviews,
            cache,
            cache_ttl_secs,
        }
    }

    /// Add a review to an entity
    ///
    /// The review starts in `Moderation` status and stays out of listings
    /// and rating aggregation until promoted via [`set_review_status`].
    ///
    /// [`set_review_status`]: ReviewService::set_review_status
    pub async fn add_review(
        &self,
        entity_id: &str,
        entity_type: &str,
        player_id: &str,
        rating: i32,
        review_text: Option<String>,
    ) -> Result<Review, AppError> {
        let new_review = NewReview {
            entity_id: entity_id.to_string(),
            entity_type: entity_type.to_string(),
            player_id: player_id.to_string(),
            rating,
            review_text,
        };

        Ok(self.reviews.create(&new_review).await?)
    }

    /// Update the rating and text of an existing review
    ///
    /// Only the authoring player may update; status is untouched.
    pub async fn update_review(
        &self,
        id: &ReviewId,
        player_id: &str,
        rating: i32,
        review_text: Option<String>,
    ) -> Result<Review, AppError> {
        let mut review = self
            .reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Review {} not found", id)))?;

        if !review.is_owned_by(player_id) {
            return Err(
                DomainError::Forbidden(format!("Player is not owner of review {}", id)).into(),
            );
        }

        review.rating = rating;
        review.review_text = review_text;
        review.updated_at = chrono::Utc::now();

        self.reviews.save(&review).await?;

        Ok(review)
    }

    /// Set the moderation status of a review
    ///
    /// Any status may be set to any other; content is untouched.
    pub async fn set_review_status(
        &self,
        id: &ReviewId,
        status: ReviewStatus,
    ) -> Result<Review, AppError> {
        let mut review = self
            .reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Review {} not found", id)))?;

        review.status = status;
        review.updated_at = chrono::Utc::now();

        self.reviews.save(&review).await?;

        Ok(review)
    }

    /// Get published reviews for an entity, read-through cached
    ///
    /// A cache hit returns the cached snapshot verbatim, however stale.
    pub async fn get_reviews(
        &self,
        entity_id: &str,
        entity_type: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, AppError> {
        let key = reviews_key(entity_type, entity_id, limit, offset);

        if let Some(cached) = self.cache.get(&key).await? {
            tracing::debug!(%key, "review list cache hit");
            return Ok(serde_json::from_str(&cached)?);
        }

        tracing::debug!(%key, "review list cache miss");
        let reviews = self
            .reviews
            .find_by_entity(
                entity_id,
                entity_type,
                ReviewStatus::Published,
                limit,
                offset,
            )
            .await?;

        self.cache
            .set(&key, &serde_json::to_string(&reviews)?, self.cache_ttl_secs)
            .await?;

        Ok(reviews)
    }

    /// Get the average published rating for an entity, read-through cached
    ///
    /// Returns `0.0` when the entity has no published reviews.
    pub async fn get_rating(&self, entity_id: &str, entity_type: &str) -> Result<f64, AppError> {
        let key = rating_key(entity_type, entity_id);

        if let Some(cached) = self.cache.get(&key).await? {
            tracing::debug!(%key, "rating cache hit");
            return cached.parse::<f64>().map_err(|e| {
                AppError::Internal(format!("Cached rating is not a number: {}", e))
            });
        }

        tracing::debug!(%key, "rating cache miss");
        let rating = self
            .reviews
            .average_published_rating(entity_id, entity_type)
            .await?;

        self.cache
            .set(&key, &rating.to_string(), self.cache_ttl_secs)
            .await?;

        Ok(rating)
    }
}

/// Cache key for a published-review listing page
fn reviews_key(entity_type: &str, entity_id: &str, limit: i64, offset: i64) -> String {
    format!("reviews:{}:{}:{}:{}", entity_type, entity_id, limit, offset)
}

/// Cache key for an entity's average rating
fn rating_key(entity_type: &str, entity_id: &str) -> String {
    format!("reviews-rating:{}:{}", entity_type, entity_id)
}

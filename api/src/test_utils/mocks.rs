//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{NewReview, Review, ReviewId, ReviewStatus};
use crate::domain::ports::{ReviewCache, ReviewRepository};
use crate::error::{CacheError, DomainError};

// ============================================================================
// In-Memory Review Repository
// ============================================================================

/// In-memory implementation of ReviewRepository
///
/// Backed by a `Vec` so listing order is insertion order, which the
/// pagination contract relies on.
#[derive(Default)]
pub struct InMemoryReviewRepository {
    reviews: Arc<RwLock<Vec<Review>>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a review for testing
    pub fn with_review(self, review: Review) -> Self {
        {
            let mut reviews = self.reviews.write().unwrap();
            reviews.push(review);
        }
        self
    }

    /// Insert a review after construction (for tests that mutate mid-flow)
    pub fn insert(&self, review: Review) {
        self.reviews.write().unwrap().push(review);
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, DomainError> {
        let reviews = self.reviews.read().unwrap();
        Ok(reviews.iter().find(|r| r.id == *id).cloned())
    }

    async fn find_by_entity(
        &self,
        entity_id: &str,
        entity_type: &str,
        status: ReviewStatus,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, DomainError> {
        let reviews = self.reviews.read().unwrap();
        Ok(reviews
            .iter()
            .filter(|r| {
                r.entity_id == entity_id && r.entity_type == entity_type && r.status == status
            })
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn average_published_rating(
        &self,
        entity_id: &str,
        entity_type: &str,
    ) -> Result<f64, DomainError> {
        let reviews = self.reviews.read().unwrap();
        let ratings: Vec<i32> = reviews
            .iter()
            .filter(|r| {
                r.entity_id == entity_id
                    && r.entity_type == entity_type
                    && r.status == ReviewStatus::Published
            })
            .map(|r| r.rating)
            .collect();

        if ratings.is_empty() {
            return Ok(0.0);
        }
        Ok(ratings.iter().sum::<i32>() as f64 / ratings.len() as f64)
    }

    async fn create(&self, new_review: &NewReview) -> Result<Review, DomainError> {
        let now = Utc::now();
        let review = Review {
            id: ReviewId::new(),
            entity_id: new_review.entity_id.clone(),
            entity_type: new_review.entity_type.clone(),
            player_id: new_review.player_id.clone(),
            rating: new_review.rating,
            review_text: new_review.review_text.clone(),
            status: ReviewStatus::Moderation,
            created_at: now,
            updated_at: now,
        };

        let mut reviews = self.reviews.write().unwrap();
        reviews.push(review.clone());
        Ok(review)
    }

    async fn save(&self, review: &Review) -> Result<(), DomainError> {
        let mut reviews = self.reviews.write().unwrap();
        if let Some(stored) = reviews.iter_mut().find(|r| r.id == review.id) {
            *stored = review.clone();
            Ok(())
        } else {
            Err(DomainError::NotFound(format!(
                "Review {} not found",
                review.id
            )))
        }
    }
}

// ============================================================================
// In-Memory Review Cache
// ============================================================================

/// In-memory implementation of ReviewCache
///
/// Entries never age out on their own; tests simulate TTL expiry with
/// [`evict`](InMemoryReviewCache::evict). Recorded TTLs are inspectable.
#[derive(Default)]
pub struct InMemoryReviewCache {
    entries: Arc<RwLock<HashMap<String, String>>>,
    ttls: Arc<RwLock<Vec<(String, u64)>>>,
}

impl InMemoryReviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a cache entry for testing
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        {
            let mut entries = self.entries.write().unwrap();
            entries.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Look at a stored entry without going through the port
    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    /// Drop an entry, simulating TTL expiry
    pub fn evict(&self, key: &str) {
        self.entries.write().unwrap().remove(key);
    }

    /// TTL recorded by the most recent `set`
    pub fn last_ttl(&self) -> Option<u64> {
        self.ttls.read().unwrap().last().map(|(_, ttl)| *ttl)
    }
}

#[async_trait]
impl ReviewCache for InMemoryReviewCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let entries = self.entries.read().unwrap();
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), CacheError> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self.ttls
            .write()
            .unwrap()
            .push((key.to_string(), ttl_secs));
        Ok(())
    }
}

// ============================================================================
// Failing Review Cache
// ============================================================================

/// A cache whose operations always fail, for asserting that cache
/// failures propagate instead of degrading to direct store reads
pub struct FailingReviewCache;

#[async_trait]
impl ReviewCache for FailingReviewCache {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Err(CacheError::Connection("cache is down".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl_secs: u64) -> Result<(), CacheError> {
        Err(CacheError::Connection("cache is down".to_string()))
    }
}

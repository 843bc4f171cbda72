//! Review domain entity
//!
//! A player's review of an entity (a story, an item, anything addressable
//! by an id + type pair). Reviews enter moderation on creation and only
//! surface in listings and rating aggregation once published.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub Uuid);

impl ReviewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ReviewId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Moderation state of a review
///
/// Transitions are deliberately unrestricted: any status may be set to any
/// other through the explicit status-set operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// Initial state, pending approval
    Moderation,
    /// Visible in listings and counted in rating aggregation
    Published,
    /// Rejected by moderation
    Rejected,
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Moderation => write!(f, "moderation"),
            ReviewStatus::Published => write!(f, "published"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moderation" => Ok(ReviewStatus::Moderation),
            "published" => Ok(ReviewStatus::Published),
            "rejected" => Ok(ReviewStatus::Rejected),
            _ => Err(format!("Unknown review status: {}", s)),
        }
    }
}

/// A player's review of an entity
///
/// Serializable both ways because published listings are cached as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub entity_id: String,
    pub entity_type: String,
    pub player_id: String,
    pub rating: i32,
    pub review_text: Option<String>,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Check whether the given player authored this review
    pub fn is_owned_by(&self, player_id: &str) -> bool {
        self.player_id == player_id
    }

    /// Check whether this review counts towards listings and ratings
    pub fn is_published(&self) -> bool {
        self.status == ReviewStatus::Published
    }
}

/// Data needed to create a new review
#[derive(Debug, Clone)]
pub struct NewReview {
    pub entity_id: String,
    pub entity_type: String,
    pub player_id: String,
    pub rating: i32,
    pub review_text: Option<String>,
}

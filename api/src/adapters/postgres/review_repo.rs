//! PostgreSQL adapter for ReviewRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Alias, Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, Unchanged,
};
use uuid::Uuid;

use crate::domain::entities::{NewReview, Review, ReviewId, ReviewStatus};
use crate::domain::ports::ReviewRepository;
use crate::entity::reviews;
use crate::error::DomainError;

/// PostgreSQL implementation of ReviewRepository
pub struct PostgresReviewRepository {
    db: DatabaseConnection,
}

impl PostgresReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, DomainError> {
        let result = reviews::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_entity(
        &self,
        entity_id: &str,
        entity_type: &str,
        status: ReviewStatus,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, DomainError> {
        let results = reviews::Entity::find()
            .filter(reviews::Column::EntityId.eq(entity_id))
            .filter(reviews::Column::EntityType.eq(entity_type))
            .filter(reviews::Column::Status.eq(status.to_string()))
            .order_by_asc(reviews::Column::CreatedAt)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn average_published_rating(
        &self,
        entity_id: &str,
        entity_type: &str,
    ) -> Result<f64, DomainError> {
        // AVG over integer ratings yields NUMERIC; cast so it maps to f64.
        let result: Option<Option<f64>> = reviews::Entity::find()
            .select_only()
            .column_as(
                Expr::expr(Func::avg(Expr::col(reviews::Column::Rating)))
                    .cast_as(Alias::new("double precision")),
                "avg_rating",
            )
            .filter(reviews::Column::EntityId.eq(entity_id))
            .filter(reviews::Column::EntityType.eq(entity_type))
            .filter(reviews::Column::Status.eq(ReviewStatus::Published.to_string()))
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        // Zero-default when no published reviews exist
        Ok(result.flatten().unwrap_or(0.0))
    }

    async fn create(&self, review: &NewReview) -> Result<Review, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = reviews::ActiveModel {
            id: Set(id),
            entity_id: Set(review.entity_id.clone()),
            entity_type: Set(review.entity_type.clone()),
            player_id: Set(review.player_id.clone()),
            rating: Set(review.rating),
            review_text: Set(review.review_text.clone()),
            status: Set(ReviewStatus::Moderation.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn save(&self, review: &Review) -> Result<(), DomainError> {
        let model = reviews::ActiveModel {
            id: Unchanged(review.id.0),
            entity_id: Set(review.entity_id.clone()),
            entity_type: Set(review.entity_type.clone()),
            player_id: Set(review.player_id.clone()),
            rating: Set(review.rating),
            review_text: Set(review.review_text.clone()),
            status: Set(review.status.to_string()),
            created_at: Set(review.created_at.fixed_offset()),
            updated_at: Set(review.updated_at.fixed_offset()),
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<reviews::Model> for Review {
    fn from(model: reviews::Model) -> Self {
        Review {
            id: ReviewId(model.id),
            entity_id: model.entity_id,
            entity_type: model.entity_type,
            player_id: model.player_id,
            rating: model.rating,
            review_text: model.review_text,
            status: model.status.parse().unwrap_or(ReviewStatus::Moderation),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

//! Unified error types for the reviews service
//!
//! This module defines error types for each layer:
//! - `DomainError`: business logic and persistence errors
//! - `CacheError`: cache collaborator errors
//! - `AppError`: application layer errors returned by the service

use thiserror::Error;

/// Domain layer errors - raised by repositories and lifecycle rules
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Cache collaborator errors
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Cache backend error: {0}")]
    Backend(String),
}

/// Application layer errors - what `ReviewService` returns
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;
pub mod redis;

pub use postgres::PostgresReviewRepository;
pub use redis::RedisReviewCache;

//! PostgreSQL adapters

pub mod review_repo;

pub use review_repo::PostgresReviewRepository;

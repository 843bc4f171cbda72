//! Reviews service core
//!
//! Moderated, rated reviews attached to arbitrary entities, with a
//! read-through cache in front of listing and rating reads.
//! Uses hexagonal (ports & adapters) architecture: the domain defines
//! repository and cache ports, adapters provide PostgreSQL and Redis
//! implementations, and the application layer owns the review lifecycle.
//!
//! Transport is out of scope here; embed [`ReviewService`] behind
//! whatever surface the deployment needs.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use app::ReviewService;
pub use config::Config;
pub use error::{AppError, CacheError, DomainError};

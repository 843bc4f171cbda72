//! Cache port trait
//!
//! A key-value cache with per-write expiry, consumed by the application
//! layer for read-through caching of listings and ratings. Values are
//! text: JSON for review lists, decimal text for the average rating.
//! No compare-and-swap or invalidation API is required - writes never
//! touch the cache and entries simply age out.

use async_trait::async_trait;

use crate::error::CacheError;

#[async_trait]
pub trait ReviewCache: Send + Sync {
    /// Fetch a cached value, `None` on miss or after expiry
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store a value that expires after `ttl_secs` seconds
    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), CacheError>;
}

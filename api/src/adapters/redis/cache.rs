//! Redis adapter for ReviewCache
//!
//! Plain GET/SETEX over a multiplexed connection. The service stores
//! text values and owns the key scheme; this adapter only moves strings.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::domain::ports::ReviewCache;
use crate::error::CacheError;

/// Redis implementation of ReviewCache
pub struct RedisReviewCache {
    conn: ConnectionManager,
}

impl RedisReviewCache {
    /// Connect to Redis and build a reconnecting connection manager
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let client =
            redis::Client::open(url).map_err(|e| CacheError::Connection(e.to_string()))?;
        let conn = client
            .get_connection_manager()
            .await
            .map_err(|e| CacheError::Connection(e.to_string()))?;

        Ok(Self { conn })
    }

    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ReviewCache for RedisReviewCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| CacheError::Backend(e.to_string()))
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| CacheError::Backend(e.to_string()))
    }
}

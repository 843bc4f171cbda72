use std::env;

/// TTL applied to every cache write when `REVIEWS_CACHE_TTL` is unset
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    /// Expiry for cached review lists and ratings, in seconds
    pub cache_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
            cache_ttl_secs: env::var("REVIEWS_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

//! Cache configuration module

use serde::{Deserialize, Serialize};

/// Default lifetime of cached entities (7 days)
pub const MAX_EXPIRATION_SECONDS: u64 = 7 * 24 * 60 * 60;

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Default TTL for cache entries in seconds
    #[serde(default = "default_ttl")]
    pub default_ttl: u64,

    /// Enable cache key prefix
    #[serde(default)]
    pub key_prefix: Option<String>,

    /// Redis database number (0-15)
    #[serde(default)]
    pub database: u8,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            connection_timeout: default_connection_timeout(),
            default_ttl: default_ttl(),
            key_prefix: None,
            database: 0,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let key_prefix = std::env::var("REDIS_NAMESPACE")
            .ok()
            .filter(|prefix| !prefix.trim().is_empty());

        Self {
            url,
            key_prefix,
            ..Default::default()
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Set the database number
    pub fn with_database(mut self, db: u8) -> Self {
        self.database = db.min(15);
        self
    }

    /// Override the default entry lifetime
    pub fn with_ttl(mut self, seconds: u64) -> Self {
        self.default_ttl = seconds;
        self
    }

    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        prefixed_key(self.key_prefix.as_deref(), key)
    }
}

/// Namespace `key` with `prefix`, skipping blank prefixes
pub fn prefixed_key(prefix: Option<&str>, key: &str) -> String {
    match prefix.map(str::trim).filter(|p| !p.is_empty()) {
        Some(prefix) => format!("{}:{}", prefix, key),
        None => key.to_string(),
    }
}

/// In-memory cache configuration (for development/testing)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MemoryCacheConfig {
    /// Maximum number of entries
    pub max_entries: usize,

    /// Default TTL for entries in seconds
    pub default_ttl: u64,
}

impl Default for MemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            default_ttl: 300, // 5 minutes
        }
    }
}

/// Cache strategy configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheStrategyConfig {
    /// Enable caching
    pub enabled: bool,

    /// Cache type (redis, memory)
    #[serde(default = "default_cache_type")]
    pub cache_type: CacheType,

    /// Redis configuration
    #[serde(default)]
    pub redis: Option<CacheConfig>,

    /// Memory cache configuration
    #[serde(default)]
    pub memory: Option<MemoryCacheConfig>,
}

/// Cache type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheType {
    Redis,
    Memory,
}

impl Default for CacheStrategyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_type: default_cache_type(),
            redis: Some(CacheConfig::default()),
            memory: None,
        }
    }
}

impl CacheStrategyConfig {
    /// In-memory strategy used for development and tests
    pub fn memory() -> Self {
        Self {
            enabled: true,
            cache_type: CacheType::Memory,
            redis: None,
            memory: Some(MemoryCacheConfig::default()),
        }
    }
}

fn default_ttl() -> u64 {
    MAX_EXPIRATION_SECONDS
}

fn default_connection_timeout() -> u64 {
    5
}

fn default_cache_type() -> CacheType {
    CacheType::Redis
}

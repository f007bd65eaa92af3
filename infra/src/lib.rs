//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Friends profile
//! emoji services. It provides concrete implementations of the core traits:
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Cache**: the entity cache resolving avatars, over Redis or an in-memory store
//! - **Telemetry**: `tracing` subscriber installation from the logging configuration
//! - **Configuration**: `.env` loading and validation of the instance settings
//!
//! ## Features
//!
//! - `redis-cache`: Enable Redis caching support (default)

use std::sync::Arc;

use fr_core::errors::DomainError;
use fr_core::repositories::AccountRepository;
use fr_core::services::{LocalDomain, ProfileEmojiScanner};
use fr_shared::config::{AppConfig, CacheType};
use fr_shared::utils::validation::validators;

/// Cache module - entity cache and its backing stores
pub mod cache;

/// Telemetry module - logging setup
pub mod telemetry;

use cache::{CacheBackend, EntityCache, MemoryCacheStore};

/// Scanner wired to the configured entity cache
pub type CachedProfileEmojiScanner<R> = ProfileEmojiScanner<EntityCache<CacheBackend, R>>;

/// Load application configuration from the environment
///
/// Reads `.env` when present. A local domain that is not a valid hostname is
/// reported but kept; the scanner then simply never matches it.
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    let config = AppConfig::from_env();

    match config.instance.local_domain() {
        Some(domain) if !validators::is_valid_hostname(domain) => {
            tracing::warn!(
                local_domain = domain,
                "LOCAL_DOMAIN is not a valid lowercase hostname"
            );
        }
        None => {
            tracing::warn!("LOCAL_DOMAIN is not set, every explicit domain is treated as remote");
        }
        _ => {}
    }

    Ok(config)
}

/// Build the cache backend selected by the configuration
pub async fn initialize_cache(config: &AppConfig) -> Result<CacheBackend, InfrastructureError> {
    if !config.cache.enabled {
        tracing::info!("Entity cache disabled");
        return Ok(CacheBackend::Disabled);
    }

    match config.cache.cache_type {
        #[cfg(feature = "redis-cache")]
        CacheType::Redis => {
            let redis_config = config.cache.redis.clone().unwrap_or_default();
            let client = cache::RedisClient::new(redis_config).await?;
            Ok(CacheBackend::Redis(client))
        }
        #[cfg(not(feature = "redis-cache"))]
        CacheType::Redis => Err(InfrastructureError::Config(
            "Redis cache requested but the redis-cache feature is disabled".to_string(),
        )),
        CacheType::Memory => {
            let memory_config = config.cache.memory.clone().unwrap_or_default();
            Ok(CacheBackend::Memory(MemoryCacheStore::new(&memory_config)))
        }
    }
}

/// Wire a profile emoji scanner on top of the configured entity cache
///
/// # Arguments
/// * `config` - Application configuration
/// * `repository` - Account storage the cache falls back to on a miss
pub async fn initialize<R: AccountRepository>(
    config: &AppConfig,
    repository: Arc<R>,
) -> Result<CachedProfileEmojiScanner<R>, InfrastructureError> {
    tracing::info!(
        environment = %config.environment,
        cache_type = ?config.cache.cache_type,
        "Initializing profile emoji services..."
    );

    let backend = initialize_cache(config).await?;
    let mut entity_cache = EntityCache::new(backend, repository);

    if let (CacheType::Redis, Some(redis)) = (config.cache.cache_type, &config.cache.redis) {
        entity_cache = entity_cache.with_ttl(redis.default_ttl);
        if let Some(prefix) = &redis.key_prefix {
            entity_cache = entity_cache.with_prefix(prefix.clone());
        }
    } else if let (CacheType::Memory, Some(memory)) = (config.cache.cache_type, &config.cache.memory) {
        entity_cache = entity_cache.with_ttl(memory.default_ttl);
    }

    let scanner = ProfileEmojiScanner::new(
        Arc::new(entity_cache),
        LocalDomain::from_config(&config.instance),
    );

    tracing::info!(
        local_domain = ?scanner.local_domain().as_str(),
        "Profile emoji services initialized successfully"
    );

    Ok(scanner)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[cfg(feature = "redis-cache")]
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Cached value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Account storage error
    #[error("Repository error: {0}")]
    Repository(#[from] DomainError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

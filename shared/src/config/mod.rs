//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `cache` - Entity cache strategy and Redis configuration
//! - `environment` - Environment detection and logging configuration
//! - `instance` - Identity of this server instance (local domain, asset host)

pub mod cache;
pub mod environment;
pub mod instance;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cache::{CacheConfig, CacheStrategyConfig, CacheType, MemoryCacheConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use instance::InstanceConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Instance identity configuration
    pub instance: InstanceConfig,

    /// Cache configuration
    pub cache: CacheStrategyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            instance: InstanceConfig::default(),
            cache: CacheStrategyConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    ///
    /// Development runs against the in-memory cache so no Redis server is needed.
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            instance: InstanceConfig::new("localhost:3000"),
            cache: CacheStrategyConfig::memory(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            instance: InstanceConfig::default(),
            cache: CacheStrategyConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment
    ///
    /// The environment preset supplies defaults; instance identity and the
    /// Redis connection are always taken from the process environment when set.
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        let mut config = match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::production();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        };

        config.instance = config.instance.merge_env();
        if config.cache.cache_type == CacheType::Redis {
            config.cache.redis = Some(CacheConfig::from_env());
        }
        config
    }
}

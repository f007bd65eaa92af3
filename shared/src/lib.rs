//! Shared utilities and common types for the Friends profile emoji services
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (instance identity, cache strategy, logging)
//! - Utility functions (asset URLs, hostname validation)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment,
    CacheConfig, CacheStrategyConfig, CacheType, MemoryCacheConfig,
    InstanceConfig, LoggingConfig, LogFormat,
};
pub use utils::{asset, validation};

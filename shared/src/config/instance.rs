//! Instance identity configuration
//!
//! Holds the hostname this server answers for. The local domain is read once at
//! startup and handed to the services that need it; nothing mutates it afterwards.

use serde::{Deserialize, Serialize};

use crate::utils::validation::validators;

/// Identity of the running instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InstanceConfig {
    /// Domain used in account handles (`user@local_domain`)
    #[serde(default)]
    pub local_domain: Option<String>,

    /// Domain the web interface is served from, when it differs from `local_domain`
    #[serde(default)]
    pub web_domain: Option<String>,

    /// Host (with scheme) serving uploaded media, e.g. `https://media.example`
    #[serde(default)]
    pub asset_host: Option<String>,
}

impl InstanceConfig {
    /// Create an instance configuration for the given local domain
    pub fn new(local_domain: impl Into<String>) -> Self {
        Self {
            local_domain: Some(local_domain.into()),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }

    /// Overlay `LOCAL_DOMAIN`, `WEB_DOMAIN` and `ASSET_HOST` on top of `self`
    pub fn merge_env(self) -> Self {
        let read = |name: &str| std::env::var(name).ok().filter(|v| validators::not_empty(v));
        Self {
            local_domain: read("LOCAL_DOMAIN").or(self.local_domain),
            web_domain: read("WEB_DOMAIN").or(self.web_domain),
            asset_host: read("ASSET_HOST").or(self.asset_host),
        }
    }

    /// Set the asset host
    pub fn with_asset_host(mut self, host: impl Into<String>) -> Self {
        self.asset_host = Some(host.into());
        self
    }

    /// The configured local domain, `None` when absent or blank
    pub fn local_domain(&self) -> Option<&str> {
        self.local_domain
            .as_deref()
            .map(str::trim)
            .filter(|domain| !domain.is_empty())
    }

    /// Web domain, falling back to the local domain
    pub fn web_domain(&self) -> Option<&str> {
        self.web_domain
            .as_deref()
            .map(str::trim)
            .filter(|domain| !domain.is_empty())
            .or_else(|| self.local_domain())
    }

    /// Base URL that relative asset paths are resolved against
    pub fn asset_base(&self) -> Option<String> {
        match self.asset_host.as_deref().map(str::trim) {
            Some(host) if !host.is_empty() => Some(host.trim_end_matches('/').to_string()),
            _ => self.web_domain().map(|domain| format!("https://{}", domain)),
        }
    }
}

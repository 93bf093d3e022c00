//! # Runtime Configuration Module
//!
//! Router settings, loaded from a YAML file and/or environment variables.
//!
//! ## Environment Variables
//!
//! ### `PATHTREE_URL_PREFIX`
//!
//! Prefix every route template is registered under (e.g. `/api/v1`).
//! A missing leading `/` is added and a trailing `/` is removed.
//!
//! Default: empty
//!
//! ### `PATHTREE_SLOW_MATCH_US`
//!
//! Route lookups slower than this many microseconds are logged at WARN.
//!
//! Default: `1000`
//!
//! ## Example Configuration
//!
//! ```yaml
//! url_prefix: /api/v1
//! slow_match_threshold_us: 500
//! ```
//!
//! ```rust
//! use pathtree::runtime_config::RouterConfig;
//!
//! let config = RouterConfig::from_env();
//! println!("prefix: {}", config.normalized_prefix());
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;

const DEFAULT_SLOW_MATCH_US: u64 = 1000;

/// Router configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Prefix inserted in front of every route template
    pub url_prefix: String,
    /// Threshold for the "Slow route matching detected" warning
    pub slow_match_threshold_us: u64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            url_prefix: String::new(),
            slow_match_threshold_us: DEFAULT_SLOW_MATCH_US,
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Load configuration from a YAML file, then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid YAML for this struct.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: RouterConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config.with_env_overrides())
    }

    /// Override fields with any `PATHTREE_*` variables that are set.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(prefix) = env::var("PATHTREE_URL_PREFIX") {
            self.url_prefix = prefix;
        }
        if let Some(us) = env::var("PATHTREE_SLOW_MATCH_US")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.slow_match_threshold_us = us;
        }
        self
    }

    /// URL prefix with a leading `/` and no trailing `/` (empty stays empty)
    #[must_use]
    pub fn normalized_prefix(&self) -> String {
        let trimmed = self.url_prefix.trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        }
    }
}

//! # Route Tables
//!
//! Declarative route definitions, loaded from YAML, JSON or TOML by file
//! extension, and turned into a [`Router`] whose handlers are handler names.
//!
//! ```yaml
//! url_prefix: /api
//! routes:
//!   - method: GET
//!     path: /pets
//!     handler: list_pets
//!   - method: GET
//!     path: /pets/{id}
//!     handler: get_pet
//! ```
//!
//! Routes are registered in file order, which is also their precedence order
//! among siblings.

use anyhow::{bail, Context, Result};
use http::Method;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::router::Router;
use crate::runtime_config::RouterConfig;

/// One route in a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// HTTP method name, case-insensitive
    pub method: String,
    /// Template path, e.g. `/pets/{id}`
    pub path: String,
    /// Name of the handler the route resolves to
    pub handler: String,
}

/// A complete route table file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    /// Overrides the configured URL prefix when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_prefix: Option<String>,
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

impl RouteTable {
    /// Load a table, choosing the format from the file extension
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, has an unknown extension, or does
    /// not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read route table {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let table: RouteTable = match extension.as_deref() {
            Some("yaml" | "yml") => serde_yaml::from_str(&content).map_err(anyhow::Error::from),
            Some("json") => serde_json::from_str(&content).map_err(anyhow::Error::from),
            Some("toml") => toml::from_str(&content).map_err(anyhow::Error::from),
            _ => bail!(
                "unsupported route table format for {} (expected .yaml, .yml, .json or .toml)",
                path.display()
            ),
        }
        .with_context(|| format!("failed to parse route table {}", path.display()))?;

        Ok(table)
    }

    /// Build a router from the table
    ///
    /// # Errors
    ///
    /// Fails on the first entry with an invalid method name, an unsupported
    /// method or a template that does not start with `/`.
    pub fn build_router(&self, config: &RouterConfig) -> Result<Router<String>> {
        let mut config = config.clone();
        if let Some(prefix) = &self.url_prefix {
            config.url_prefix = prefix.clone();
        }

        let mut router = Router::new(&config);
        for (index, spec) in self.routes.iter().enumerate() {
            let method = Method::from_bytes(spec.method.to_ascii_uppercase().as_bytes())
                .with_context(|| {
                    format!("route #{} has invalid method '{}'", index, spec.method)
                })?;
            router
                .add_route(method, &spec.path, spec.handler.clone())
                .with_context(|| {
                    format!(
                        "route #{} ({} {} -> {}) could not be registered",
                        index, spec.method, spec.path, spec.handler
                    )
                })?;
        }

        router.log_summary();
        info!(
            routes_count = router.route_count(),
            url_prefix = %router.url_prefix(),
            "Route table built"
        );
        Ok(router)
    }
}

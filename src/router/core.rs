//! Router core module - hot path for request routing.
//!
//! Routes are namespaced by HTTP method inside a single [`PathTree`]: the
//! route `GET /users/{id}` is stored at `/GET/users/{id}`. A lookup walks the
//! method segment first and then the request path, without concatenating the
//! two into a new string.

#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use http::Method;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::error::{PathTreeError, RouterError};
use crate::runtime_config::RouterConfig;
use crate::tree::{MatchResult, PathTree};

/// Maximum number of path parameters before heap allocation.
/// Most REST APIs have ≤4 path params (e.g., /users/{id}/posts/{postId}).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage.
///
/// Names are `Arc<str>` shared with the template node; values are copied
/// out of the request path.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Methods the router namespaces routes under, with their tree segment
const SUPPORTED_METHODS: [(Method, &str); 8] = [
    (Method::GET, "GET"),
    (Method::POST, "POST"),
    (Method::PUT, "PUT"),
    (Method::DELETE, "DELETE"),
    (Method::PATCH, "PATCH"),
    (Method::OPTIONS, "OPTIONS"),
    (Method::HEAD, "HEAD"),
    (Method::TRACE, "TRACE"),
];

fn method_segment(method: &Method) -> Option<&'static str> {
    SUPPORTED_METHODS
        .iter()
        .find(|(m, _)| m == method)
        .map(|(_, name)| *name)
}

/// Result of successfully matching a request to a route
pub struct RouteMatch<'a, H> {
    method: Method,
    handler: &'a Arc<H>,
    matched: MatchResult<'a, Arc<H>>,
}

impl<'a, H> RouteMatch<'a, H> {
    /// Handler registered for the route
    #[inline]
    #[must_use]
    pub fn handler(&self) -> &'a Arc<H> {
        self.handler
    }

    #[inline]
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Underlying tree match; its node path starts with the method segment
    #[inline]
    #[must_use]
    pub fn tree_match(&self) -> &MatchResult<'a, Arc<H>> {
        &self.matched
    }

    /// Get a path parameter by name
    ///
    /// Uses "last write wins" semantics: if duplicate parameter names exist
    /// at different path depths (e.g., `/org/{id}/team/{team_id}/user/{id}`),
    /// returns the last occurrence (the user id, not the org id).
    #[inline]
    #[must_use]
    pub fn path_param(&self, name: &str) -> Option<&'a str> {
        self.matched.path_param(name)
    }

    /// Path parameters in path order (e.g., `{id}` → `("id", "123")`)
    #[must_use]
    pub fn path_params(&self) -> ParamVec {
        self.matched
            .node_path()
            .iter()
            .filter_map(|bound| {
                let name = bound.node().param_name()?;
                let value = bound.value()?;
                Some((Arc::clone(name), value.to_owned()))
            })
            .collect()
    }

    /// Convert path params to an owned HashMap
    /// Note: This allocates - use path_param() in hot paths instead
    #[must_use]
    pub fn path_params_map(&self) -> HashMap<String, String> {
        self.matched
            .path_params()
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }
}

impl<H> std::fmt::Debug for RouteMatch<'_, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteMatch")
            .field("method", &self.method)
            .field("matched", &self.matched)
            .finish_non_exhaustive()
    }
}

/// A registered route as listed by [`Router::routes`]
#[derive(Debug)]
pub struct RouteEntry<H> {
    pub method: Method,
    /// Template path with the URL prefix included (e.g. `/api/users/{id}`)
    pub path: String,
    pub handler: Arc<H>,
}

/// Router that matches HTTP requests to handlers using the segment tree
///
/// Built during a single-threaded registration phase (`&mut self`) and then
/// shared read-only. For registration after startup see
/// [`crate::router::SharedRouter`].
pub struct Router<H> {
    tree: PathTree<Arc<H>>,
    /// Normalized URL prefix inserted between method and template (e.g. `/api/v1`)
    url_prefix: String,
    slow_match_threshold: Duration,
}

impl<H> Clone for Router<H> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
            url_prefix: self.url_prefix.clone(),
            slow_match_threshold: self.slow_match_threshold,
        }
    }
}

impl<H> std::fmt::Debug for Router<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("url_prefix", &self.url_prefix)
            .field("route_count", &self.route_count())
            .finish_non_exhaustive()
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new(&RouterConfig::default())
    }
}

impl<H> Router<H> {
    /// Create an empty router
    #[must_use]
    pub fn new(config: &RouterConfig) -> Self {
        Self {
            tree: PathTree::new(),
            url_prefix: config.normalized_prefix(),
            slow_match_threshold: Duration::from_micros(config.slow_match_threshold_us),
        }
    }

    /// URL prefix every template is registered under
    #[must_use]
    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Number of registered routes
    ///
    /// Counted from the tree, so edits made through [`Router::tree_mut`] are
    /// reflected.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.tree.data_count()
    }

    /// The underlying tree, for introspection
    #[must_use]
    pub fn tree(&self) -> &PathTree<Arc<H>> {
        &self.tree
    }

    /// Mutable access to the tree, e.g. to move a route ahead of a parameter sibling
    pub fn tree_mut(&mut self) -> &mut PathTree<Arc<H>> {
        &mut self.tree
    }

    /// Register `handler` for `method` + `template`
    ///
    /// The template must start with `/`; trailing `/`s are ignored. Returns the
    /// handler previously stored at the same node, if any.
    ///
    /// # Errors
    ///
    /// - [`RouterError::UnsupportedMethod`] for methods outside the supported set
    /// - [`RouterError::Tree`] for templates that do not start with `/`, or
    ///   whose last segment is taken by an earlier parameter route
    ///   ([`PathTreeError::Absorbed`]); register the literal route first
    pub fn add_route(
        &mut self,
        method: Method,
        template: &str,
        handler: H,
    ) -> Result<Option<Arc<H>>, RouterError> {
        let Some(method_name) = method_segment(&method) else {
            warn!(method = %method, template = %template, "Unsupported method, route skipped");
            return Err(RouterError::UnsupportedMethod { method });
        };
        if !template.starts_with('/') {
            return Err(PathTreeError::invalid_path(template).into());
        }

        let mut key =
            String::with_capacity(1 + method_name.len() + self.url_prefix.len() + template.len());
        key.push('/');
        key.push_str(method_name);
        key.push_str(&self.url_prefix);
        key.push_str(template);

        let shared_with = self.tree.absorbing_param(&key).map(str::to_owned);

        let previous = match self.tree.register(&key, Arc::new(handler)) {
            Ok(previous) => previous,
            Err(err) => {
                if let PathTreeError::Absorbed { param, .. } = &err {
                    warn!(
                        method = %method,
                        template = %template,
                        absorbed_by = %param,
                        "Route template absorbed by earlier parameter segment"
                    );
                }
                return Err(err.into());
            }
        };

        if let Some(param) = shared_with {
            debug!(
                method = %method,
                template = %template,
                shared_with = %param,
                "Route template nested under earlier parameter segment"
            );
        }
        if previous.is_some() {
            warn!(method = %method, template = %template, "Route handler replaced");
        } else {
            debug!(method = %method, template = %template, "Route registered");
        }
        Ok(previous)
    }

    /// Match an HTTP request to a route
    ///
    /// Any query string is ignored. A path that only reaches an intermediate
    /// node (no handler attached) is a miss.
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - If a matching route is found
    /// * `None` - If no route matches (results in 404)
    #[must_use]
    pub fn route<'a>(&'a self, method: Method, path: &'a str) -> Option<RouteMatch<'a, H>> {
        // RT1: Route match attempt
        debug!(method = %method, path = %path, "Route match attempt");

        let match_start = Instant::now();
        let found = self.lookup(&method, path);
        let match_duration = match_start.elapsed();

        let Some((handler, matched)) = found else {
            // RT4: No route found (404)
            warn!(
                method = %method,
                path = %path,
                duration_us = match_duration.as_micros(),
                "No route matched"
            );
            return None;
        };

        // RT3: Route matched
        if match_duration > self.slow_match_threshold {
            warn!(
                method = %method,
                path = %path,
                path_params = ?matched.path_params(),
                duration_us = match_duration.as_micros(),
                "Slow route matching detected"
            );
        } else {
            info!(
                method = %method,
                path = %path,
                path_params = ?matched.path_params(),
                duration_us = match_duration.as_micros(),
                "Route matched"
            );
        }

        Some(RouteMatch {
            method,
            handler,
            matched,
        })
    }

    fn lookup<'a>(
        &'a self,
        method: &Method,
        path: &'a str,
    ) -> Option<(&'a Arc<H>, MatchResult<'a, Arc<H>>)> {
        let method_name = method_segment(method)?;
        let path = path.split_once('?').map_or(path, |(p, _query)| p);
        let rest = path.strip_prefix('/')?.trim_end_matches('/');

        // "/" is the method node itself
        let below = (!rest.is_empty()).then(|| rest.split('/'));
        let segments = [self.tree.root().name(), method_name]
            .into_iter()
            .chain(below.into_iter().flatten());
        let matched = self.tree.resolve_segments(segments)?;
        let handler = matched.data()?;
        Some((handler, matched))
    }

    /// All registered routes in tree order
    #[must_use]
    pub fn routes(&self) -> Vec<RouteEntry<H>> {
        self.tree
            .templates()
            .into_iter()
            .filter_map(|(key, handler)| {
                let key = key.strip_prefix('/')?;
                let (method, template) = key.split_once('/').unwrap_or((key, ""));
                Some(RouteEntry {
                    method: Method::from_bytes(method.as_bytes()).ok()?,
                    path: format!("/{template}"),
                    handler: Arc::clone(handler),
                })
            })
            .collect()
    }

    /// Print all registered routes to stdout
    pub fn dump_routes(&self)
    where
        H: std::fmt::Debug,
    {
        println!(
            "[routes] url_prefix={} count={}",
            self.url_prefix,
            self.route_count()
        );
        for entry in self.routes() {
            println!("[route] {} {} -> {:?}", entry.method, entry.path, entry.handler);
        }
    }

    /// Log a summary of the routing table
    pub fn log_summary(&self) {
        let routes_summary: Vec<String> = self
            .routes()
            .iter()
            .take(10)
            .map(|entry| format!("{} {}", entry.method, entry.path))
            .collect();

        info!(
            routes_count = self.route_count(),
            url_prefix = %self.url_prefix,
            routes_summary = ?routes_summary,
            "Routing table loaded"
        );
    }
}

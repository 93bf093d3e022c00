//! # Router Module
//!
//! The router module maps HTTP method + request path to a handler using the
//! segment tree from [`crate::tree`].
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Namespacing every route template under its HTTP method
//! - Matching incoming requests to registered routes
//! - Extracting path parameters from matched routes
//! - Publishing new routes to concurrent readers ([`SharedRouter`])
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use pathtree::router::Router;
//!
//! let mut router = Router::default();
//! router.add_route(Method::GET, "/pets/{id}", "get_pet").unwrap();
//!
//! let matched = router.route(Method::GET, "/pets/123").unwrap();
//! assert_eq!(**matched.handler(), "get_pet");
//! assert_eq!(matched.path_param("id"), Some("123"));
//! assert!(router.route(Method::POST, "/pets/123").is_none());
//! ```
//!
//! ## Precedence
//!
//! Siblings are tried in registration order and the first match wins, so
//! register literal routes before parameter routes at the same position
//! (`/pets/mine` before `/pets/{id}`) when the literal must take priority.

mod core;
mod shared;

pub use self::core::{ParamVec, RouteEntry, RouteMatch, Router, MAX_INLINE_PARAMS};
pub use shared::SharedRouter;

//! # pathtree
//!
//! **pathtree** resolves URL-like paths such as `/users/42/posts` against a
//! tree of registered path templates such as `/users/{id}/posts`, binding
//! each `{name}` segment to the concrete value it matched.
//!
//! ## Architecture
//!
//! - **[`segment`]** - Segment syntax: splitting paths, recognising `{param}` segments
//! - **[`tree`]** - The segment tree: [`PathTree`], [`SegmentNode`] and [`MatchResult`]
//! - **[`router`]** - HTTP method namespacing over the tree and lock-free runtime updates
//! - **[`table`]** - Route tables loaded from YAML, JSON or TOML
//! - **[`hot_reload`]** - Rebuilding a shared router when its route table changes
//! - **[`runtime_config`]** - Router configuration from files and environment
//! - **[`logging`]** - `tracing` subscriber setup for binaries
//! - **[`problem`]** - JSON error bodies for unmatched requests
//! - **[`cli`]** - The `pathtree` command-line tool
//!
//! ### Resolution
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Tree as PathTree
//!     participant Node as SegmentNode
//!
//!     Caller->>Tree: resolve("/users/42")
//!     Tree->>Tree: split on '/', compare first segment with root name
//!     loop each remaining segment
//!         Tree->>Node: first child (in order) matching the segment
//!         Node-->>Tree: literal equal, or any {param}
//!     end
//!     Tree-->>Caller: MatchResult (node path + bound values)
//! ```
//!
//! Children are tried in the order they were added and the first match wins;
//! there is no backtracking. A parameter child added before a literal sibling
//! therefore shadows it.
//!
//! ## Quick Start
//!
//! ```
//! use pathtree::PathTree;
//!
//! let mut tree = PathTree::new();
//! tree.register("/users/{id}/posts", "list_posts").unwrap();
//!
//! let matched = tree.resolve("/users/42/posts").unwrap();
//! assert_eq!(matched.data(), Some(&"list_posts"));
//! assert_eq!(matched.path_param("id"), Some("42"));
//! ```
//!
//! ## HTTP Routing
//!
//! ```
//! use http::Method;
//! use pathtree::router::Router;
//! use pathtree::runtime_config::RouterConfig;
//!
//! let mut router = Router::new(&RouterConfig::default());
//! router.add_route(Method::GET, "/pets/{id}", "get_pet").unwrap();
//!
//! let matched = router.route(Method::GET, "/pets/7?verbose=true").unwrap();
//! assert_eq!(**matched.handler(), "get_pet");
//! assert_eq!(matched.path_param("id"), Some("7"));
//! assert!(router.route(Method::POST, "/pets/7").is_none());
//! ```
//!
//! ## Concurrency
//!
//! Resolution takes `&self` and never mutates, so a populated tree can be
//! shared across threads freely. Registration takes `&mut self`; to add routes
//! while serving, use [`router::SharedRouter`], which publishes a new router
//! snapshot atomically.

pub mod cli;
pub mod error;
pub mod hot_reload;
pub mod logging;
pub mod problem;
pub mod router;
pub mod runtime_config;
pub mod segment;
pub mod table;
pub mod tree;

pub use error::{PathTreeError, RouterError};
pub use segment::SegmentKind;
pub use tree::{BoundSegment, MatchResult, PathTree, SegmentNode};

//! # Path Tree
//!
//! Segment tree that maps path templates such as `/users/{id}/posts` to data
//! and resolves concrete request paths against them.
//!
//! ## Structure
//!
//! - Each [`SegmentNode`] represents one `/`-delimited segment
//! - Literal segments (`users`) match the same text exactly
//! - Parameter segments (`{id}`) match any single segment
//! - Children keep insertion order; the first matching child wins
//!
//! ## Resolution
//!
//! [`PathTree::resolve`] walks the tree once, left to right, and never
//! backtracks. A parameter match produces a [`BoundSegment`] that borrows the
//! request text instead of copying or mutating the template node, so a built
//! tree can be resolved from many threads without synchronization.
//!
//! ```
//! use pathtree::tree::PathTree;
//!
//! let mut tree = PathTree::new();
//! tree.register("/users", "list_users").unwrap();
//! tree.register("/users/{id}/posts/{post_id}", "get_post").unwrap();
//!
//! let matched = tree.resolve("/users/7/posts/99").unwrap();
//! assert_eq!(matched.data(), Some(&"get_post"));
//! assert_eq!(matched.path_params().get("id"), Some(&"7"));
//! assert_eq!(matched.path_params().get("post_id"), Some(&"99"));
//!
//! // no partial matches
//! assert!(tree.resolve("/users/7/posts").is_ok_and(|m| m.data().is_none()));
//! assert!(tree.resolve("/users/7/posts/99/comments").is_err());
//! ```
//!
//! ## Precedence
//!
//! Sibling order decides ambiguous matches. If `/x/{id}` is registered before
//! `/x/literal`, the parameter node is found first for `literal` as well.
//! Use [`SegmentNode::add_child_at`] on [`PathTree::root_mut`] (or a deeper
//! node) to place a literal ahead of a parameter sibling.

mod core;
mod node;
mod result;

pub use self::core::PathTree;
pub use node::SegmentNode;
pub use result::{BoundSegment, MatchResult, NodePath, MAX_INLINE_SEGMENTS};

use std::collections::HashMap;
use std::fmt;

use once_cell::unsync::OnceCell;
use smallvec::SmallVec;

use super::node::SegmentNode;

/// Maximum path depth before the node path spills to the heap.
pub const MAX_INLINE_SEGMENTS: usize = 8;

/// A template node as it was matched by one resolve call.
///
/// For parameter nodes `value` holds the request text bound to the parameter.
/// The template node itself is never written; the binding lives here and
/// borrows from the request path.
pub struct BoundSegment<'a, T> {
    node: &'a SegmentNode<T>,
    value: Option<&'a str>,
}

impl<'a, T> BoundSegment<'a, T> {
    pub(crate) fn new(node: &'a SegmentNode<T>, segment: &'a str) -> Self {
        let value = if node.is_param() { Some(segment) } else { None };
        Self { node, value }
    }

    /// The template node this segment matched
    #[inline]
    #[must_use]
    pub fn node(&self) -> &'a SegmentNode<T> {
        self.node
    }

    /// Template segment text (`users`, `{id}`)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.node.name()
    }

    /// Request text bound to a parameter node, `None` for literal nodes
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&'a str> {
        self.value
    }

    #[inline]
    #[must_use]
    pub fn is_param(&self) -> bool {
        self.node.is_param()
    }

    #[inline]
    #[must_use]
    pub fn data(&self) -> Option<&'a T> {
        self.node.data()
    }
}

impl<T> Clone for BoundSegment<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BoundSegment<'_, T> {}

impl<T> fmt::Debug for BoundSegment<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundSegment")
            .field("name", &self.node.name())
            .field("value", &self.value)
            .finish()
    }
}

/// Node path matched by a single resolve call
pub type NodePath<'a, T> = SmallVec<[BoundSegment<'a, T>; MAX_INLINE_SEGMENTS]>;

/// Result of successfully resolving a path against a [`super::PathTree`]
///
/// Holds the matched nodes from just below the root down to the terminal
/// node. Parameter bindings are derived from the node path the first time
/// [`MatchResult::path_params`] is called and cached afterwards.
///
/// A match result borrows both the tree and the request path; it is meant to
/// live for the duration of one request.
pub struct MatchResult<'a, T> {
    node_path: NodePath<'a, T>,
    params: OnceCell<HashMap<&'a str, &'a str>>,
}

impl<'a, T> MatchResult<'a, T> {
    pub(crate) fn new(node_path: NodePath<'a, T>) -> Self {
        Self {
            node_path,
            params: OnceCell::new(),
        }
    }

    /// Matched nodes in path order, root excluded
    #[inline]
    #[must_use]
    pub fn node_path(&self) -> &[BoundSegment<'a, T>] {
        &self.node_path
    }

    /// The terminal node that was matched
    #[inline]
    #[must_use]
    pub fn terminal(&self) -> Option<&'a SegmentNode<T>> {
        self.node_path.last().map(BoundSegment::node)
    }

    /// Data attached to the terminal node
    ///
    /// `None` when the terminal node carries no data, or when the path was
    /// only the root segment and the node path is empty.
    #[inline]
    #[must_use]
    pub fn data(&self) -> Option<&'a T> {
        self.terminal().and_then(SegmentNode::data)
    }

    /// Parameter name to bound value, for every parameter node on the path.
    ///
    /// If two parameter nodes share a name the later one wins.
    pub fn path_params(&self) -> &HashMap<&'a str, &'a str> {
        self.params.get_or_init(|| {
            let mut params = HashMap::with_capacity(self.node_path.len());
            for bound in &self.node_path {
                if let (Some(name), Some(value)) = (bound.node().param_name(), bound.value()) {
                    params.insert(name.as_ref(), value);
                }
            }
            params
        })
    }

    /// Get a single parameter by name without building the map.
    ///
    /// Uses the same "last write wins" rule as [`MatchResult::path_params`].
    #[must_use]
    pub fn path_param(&self, name: &str) -> Option<&'a str> {
        self.node_path
            .iter()
            .rev()
            .find(|bound| bound.node().param_name().is_some_and(|n| n.as_ref() == name))
            .and_then(|bound| bound.value())
    }
}

impl<T> fmt::Debug for MatchResult<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchResult")
            .field("node_path", &self.node_path)
            .finish_non_exhaustive()
    }
}

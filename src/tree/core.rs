use std::str::Split;

use crate::error::PathTreeError;
use crate::segment::split_path;

use super::node::SegmentNode;
use super::result::{BoundSegment, MatchResult, NodePath};

/// Segment tree mapping path templates to data
///
/// Templates are registered once (`&mut self`) and then resolved any number
/// of times (`&self`). Every lookup is a single greedy left-to-right descent:
/// at each depth the first child in stored order that accepts the segment is
/// taken and there is no backtracking.
///
/// # Example
///
/// ```
/// use pathtree::tree::PathTree;
///
/// let mut tree = PathTree::new();
/// tree.register("/users/{id}", "get_user").unwrap();
///
/// let matched = tree.resolve("/users/42").unwrap();
/// assert_eq!(matched.data(), Some(&"get_user"));
/// assert_eq!(matched.path_param("id"), Some("42"));
/// ```
#[derive(Debug, Clone)]
pub struct PathTree<T> {
    root: SegmentNode<T>,
}

impl<T> Default for PathTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PathTree<T> {
    /// Create a tree whose root is the empty segment in front of a leading `/`
    #[must_use]
    pub fn new() -> Self {
        Self::with_root("")
    }

    /// Create a tree scoped under a fixed first segment.
    ///
    /// Only paths whose first segment equals `name` resolve, e.g. a root of
    /// `"api"` accepts `api/users` but not `/users`.
    #[must_use]
    pub fn with_root(name: impl Into<String>) -> Self {
        Self {
            root: SegmentNode::new(name),
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &SegmentNode<T> {
        &self.root
    }

    /// Mutable access to the root for re-shaping the tree directly
    #[inline]
    pub fn root_mut(&mut self) -> &mut SegmentNode<T> {
        &mut self.root
    }

    /// Match a request path against the registered templates
    ///
    /// Trailing `/`s are ignored. A path naming only the root matches with an
    /// empty node path and no data.
    ///
    /// # Errors
    ///
    /// [`PathTreeError::InvalidPath`] if the first segment is not the root's
    /// name or any later segment has no matching child.
    pub fn resolve<'a>(&'a self, path: &'a str) -> Result<MatchResult<'a, T>, PathTreeError> {
        self.resolve_segments(split_path(path))
            .ok_or_else(|| PathTreeError::invalid_path(path))
    }

    /// Match pre-split segments; the first segment is checked against the root.
    ///
    /// Segments are used as given, so trailing empty segments must already be
    /// dropped.
    ///
    /// Lets callers prepend namespace segments without building a new string.
    pub fn resolve_segments<'a, I>(&'a self, segments: I) -> Option<MatchResult<'a, T>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut segments = segments.into_iter();
        if segments.next()? != self.root.name() {
            return None;
        }

        let mut node_path = NodePath::new();
        let mut node = &self.root;
        for segment in segments {
            let child = node.find_child(segment)?;
            node_path.push(BoundSegment::new(child, segment));
            node = child;
        }

        Some(MatchResult::new(node_path))
    }

    /// Register `data` at `path`, growing the tree as needed
    ///
    /// Existing children are reused by the same first-match rule as
    /// [`PathTree::resolve`]. Missing segments are appended as new children,
    /// after any existing siblings.
    ///
    /// An earlier parameter sibling absorbs a literal segment registered after
    /// it. Inner segments then grow below that parameter node, but data is
    /// never written through it: if the last segment of `path` lands on a
    /// parameter node that is not the template's own `{name}`, registration
    /// fails and the tree is left unchanged.
    ///
    /// Returns the data previously attached to the terminal node.
    ///
    /// # Errors
    ///
    /// - [`PathTreeError::InvalidPath`] if the first segment is not the root's
    ///   name, or `path` names only the root
    /// - [`PathTreeError::Absorbed`] if the last segment is taken by a
    ///   parameter node registered earlier
    pub fn register(&mut self, path: &str, data: T) -> Result<Option<T>, PathTreeError> {
        let last = split_path(path).last().unwrap_or_default();
        let node = self.walk_mut(path, true)?;
        if node.is_param() && node.name() != last {
            return Err(PathTreeError::Absorbed {
                path: path.to_owned(),
                param: node.name().to_owned(),
            });
        }
        Ok(node.set_data(data))
    }

    /// Data attached at `path`
    ///
    /// # Errors
    ///
    /// [`PathTreeError::InvalidPath`] if the path does not resolve or names
    /// only the root.
    pub fn data_at(&self, path: &str) -> Result<Option<&T>, PathTreeError> {
        Ok(self.walk(path)?.data())
    }

    /// Mutable data attached at `path`, without growing the tree
    ///
    /// # Errors
    ///
    /// Same as [`PathTree::data_at`].
    pub fn data_at_mut(&mut self, path: &str) -> Result<Option<&mut T>, PathTreeError> {
        let node = self.walk_mut(path, false)?;
        Ok(node.data_mut())
    }

    /// Detach the data at `path`; the nodes themselves stay in place
    ///
    /// # Errors
    ///
    /// Same as [`PathTree::data_at`].
    pub fn remove(&mut self, path: &str) -> Result<Option<T>, PathTreeError> {
        let node = self.walk_mut(path, false)?;
        Ok(node.take_data())
    }

    /// First parameter node, along the existing nodes `path` walks through,
    /// that would bind text other than its own name.
    ///
    /// `None` if no parameter absorbs part of `path`, or the walk leaves the
    /// existing tree first.
    #[must_use]
    pub fn absorbing_param<'a>(&'a self, path: &str) -> Option<&'a str> {
        let mut segments = split_path(path);
        if segments.next() != Some(self.root.name()) {
            return None;
        }

        let mut node = &self.root;
        for segment in segments {
            let child = node.find_child(segment)?;
            if child.is_param() && child.name() != segment {
                return Some(child.name());
            }
            node = child;
        }
        None
    }

    /// Every node that carries data, as `(template path, data)`, depth first
    /// in child order.
    #[must_use]
    pub fn templates(&self) -> Vec<(String, &T)> {
        let mut out = Vec::new();
        let mut stack: Vec<(String, &SegmentNode<T>)> =
            vec![(self.root.name().to_owned(), &self.root)];

        while let Some((prefix, node)) = stack.pop() {
            if let Some(data) = node.data() {
                out.push((prefix.clone(), data));
            }
            // reversed so the first child is popped first
            for child in node.children().iter().rev() {
                let mut path = String::with_capacity(prefix.len() + child.name().len() + 1);
                path.push_str(&prefix);
                path.push('/');
                path.push_str(child.name());
                stack.push((path, child));
            }
        }

        out
    }

    /// Total number of nodes, root included
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.count_nodes(|_| true)
    }

    /// Number of nodes carrying data
    #[must_use]
    pub fn data_count(&self) -> usize {
        self.count_nodes(|node| node.data().is_some())
    }

    fn count_nodes(&self, predicate: impl Fn(&SegmentNode<T>) -> bool) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if predicate(node) {
                count += 1;
            }
            stack.extend(node.children());
        }
        count
    }

    /// Segments after the root; fails unless the root matches and at least
    /// one segment follows it
    fn segments_below_root<'p>(&self, path: &'p str) -> Result<Split<'p, char>, PathTreeError> {
        let mut segments = split_path(path);
        if segments.next() != Some(self.root.name()) || segments.clone().next().is_none() {
            return Err(PathTreeError::invalid_path(path));
        }
        Ok(segments)
    }

    fn walk(&self, path: &str) -> Result<&SegmentNode<T>, PathTreeError> {
        let mut node = &self.root;
        for segment in self.segments_below_root(path)? {
            node = node
                .find_child(segment)
                .ok_or_else(|| PathTreeError::invalid_path(path))?;
        }
        Ok(node)
    }

    fn walk_mut(&mut self, path: &str, grow: bool) -> Result<&mut SegmentNode<T>, PathTreeError> {
        let segments = self.segments_below_root(path)?;

        let mut node = &mut self.root;
        for segment in segments {
            let index = match node.find_child_index(segment) {
                Some(index) => index,
                None if grow => {
                    node.add_child(SegmentNode::new(segment));
                    node.number_of_children() - 1
                }
                None => return Err(PathTreeError::invalid_path(path)),
            };
            node = node.child_at_mut(index)?;
        }

        Ok(node)
    }
}

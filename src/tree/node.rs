use std::sync::Arc;

use crate::error::PathTreeError;
use crate::segment::SegmentKind;

/// Node in the path tree
///
/// Each node represents one path segment. Children are kept in insertion
/// order, and that order decides which child wins when more than one could
/// match a request segment: the walk always takes the first match.
///
/// A node's name and kind never change after creation. Resolution only ever
/// reads nodes, so a fully built tree can be shared between threads.
#[derive(Debug, Clone)]
pub struct SegmentNode<T> {
    /// Segment text as registered (`users`, `{id}`, ...)
    name: String,
    /// Literal or parameter, classified from `name` on creation
    kind: SegmentKind,
    /// Payload attached by registration
    data: Option<T>,
    /// Child nodes in insertion order
    children: Vec<SegmentNode<T>>,
}

impl<T> SegmentNode<T> {
    /// Create a node without data
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = SegmentKind::classify(&name);
        Self {
            name,
            kind,
            data: None,
            children: Vec::new(),
        }
    }

    /// Create a node carrying `data`
    pub fn with_data(name: impl Into<String>, data: T) -> Self {
        let mut node = Self::new(name);
        node.data = Some(data);
        node
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> &SegmentKind {
        &self.kind
    }

    /// Check if this is a parameter node
    #[inline]
    #[must_use]
    pub fn is_param(&self) -> bool {
        self.kind.is_param()
    }

    /// Parameter name with braces stripped (`{id}` -> `id`)
    #[inline]
    #[must_use]
    pub fn param_name(&self) -> Option<&Arc<str>> {
        match &self.kind {
            SegmentKind::Param { name } => Some(name),
            SegmentKind::Literal => None,
        }
    }

    /// Whether this node accepts `segment` at its position.
    ///
    /// Parameter nodes accept anything; literal nodes require identical text.
    #[inline]
    #[must_use]
    pub fn matches(&self, segment: &str) -> bool {
        match self.kind {
            SegmentKind::Param { .. } => true,
            SegmentKind::Literal => self.name == segment,
        }
    }

    #[inline]
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    #[inline]
    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    /// Attach data, returning whatever was attached before
    pub fn set_data(&mut self, data: T) -> Option<T> {
        self.data.replace(data)
    }

    /// Detach and return the data
    pub fn take_data(&mut self) -> Option<T> {
        self.data.take()
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[SegmentNode<T>] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn number_of_children(&self) -> usize {
        self.children.len()
    }

    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child_at(&self, index: usize) -> Result<&SegmentNode<T>, PathTreeError> {
        let len = self.children.len();
        self.children
            .get(index)
            .ok_or(PathTreeError::IndexOutOfRange { index, len })
    }

    pub fn child_at_mut(&mut self, index: usize) -> Result<&mut SegmentNode<T>, PathTreeError> {
        let len = self.children.len();
        self.children
            .get_mut(index)
            .ok_or(PathTreeError::IndexOutOfRange { index, len })
    }

    /// Append a child after all existing children (lowest precedence)
    pub fn add_child(&mut self, child: SegmentNode<T>) {
        self.children.push(child);
    }

    /// Insert a child at `index`, shifting later children back.
    ///
    /// `index == number_of_children()` appends. Anything larger fails.
    pub fn add_child_at(&mut self, index: usize, child: SegmentNode<T>) -> Result<(), PathTreeError> {
        let len = self.children.len();
        if index > len {
            return Err(PathTreeError::IndexOutOfRange { index, len });
        }
        self.children.insert(index, child);
        Ok(())
    }

    /// Remove and return the child at `index`
    pub fn remove_child_at(&mut self, index: usize) -> Result<SegmentNode<T>, PathTreeError> {
        let len = self.children.len();
        if index >= len {
            return Err(PathTreeError::IndexOutOfRange { index, len });
        }
        Ok(self.children.remove(index))
    }

    pub fn remove_all_children(&mut self) {
        self.children.clear();
    }

    /// Replace the whole child list
    pub fn set_children(&mut self, children: Vec<SegmentNode<T>>) {
        self.children = children;
    }

    /// First child, in stored order, that accepts `segment`
    #[inline]
    pub(crate) fn find_child(&self, segment: &str) -> Option<&SegmentNode<T>> {
        self.children.iter().find(|child| child.matches(segment))
    }

    #[inline]
    pub(crate) fn find_child_index(&self, segment: &str) -> Option<usize> {
        self.children.iter().position(|child| child.matches(segment))
    }
}

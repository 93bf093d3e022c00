//! Segment syntax helpers
//!
//! A template path is split on `/` into segments. A segment written as `{name}`
//! (at least one character between the braces) is a parameter segment and
//! matches any single request segment; every other segment is literal and is
//! compared byte-for-byte.
//!
//! There is no escaping: a segment made of `{`, at least one character and
//! `}` is always treated as a parameter. `{}` on its own is literal.

use std::sync::Arc;

/// Opening delimiter of a parameter segment
pub const PARAM_OPEN: char = '{';
/// Closing delimiter of a parameter segment
pub const PARAM_CLOSE: char = '}';

/// Returns `true` if `segment` has parameter syntax (`^\{.+\}$`).
#[inline]
#[must_use]
pub fn is_param_segment(segment: &str) -> bool {
    segment.len() > 2 && segment.starts_with(PARAM_OPEN) && segment.ends_with(PARAM_CLOSE)
}

/// Strip the braces from a parameter segment.
///
/// Returns `None` for literal segments.
///
/// ```
/// use pathtree::segment::param_name;
///
/// assert_eq!(param_name("{id}"), Some("id"));
/// assert_eq!(param_name("users"), None);
/// ```
#[inline]
#[must_use]
pub fn param_name(segment: &str) -> Option<&str> {
    if is_param_segment(segment) {
        // both delimiters are single-byte ASCII
        Some(&segment[1..segment.len() - 1])
    } else {
        None
    }
}

/// Split a path into its `/`-delimited segments.
///
/// A leading `/` produces an empty first segment, which is matched against the
/// tree root's name. Empty inner segments are preserved; trailing `/`s are
/// ignored, so `/users/42/` splits like `/users/42`.
#[inline]
pub fn split_path(path: &str) -> std::str::Split<'_, char> {
    path.trim_end_matches('/').split('/')
}

/// Classification of a segment, computed once when a node is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// Matches only a request segment with identical text
    Literal,
    /// Matches any request segment and binds its text to `name`
    Param {
        /// Parameter name with the braces stripped, shared with every match result
        name: Arc<str>,
    },
}

impl SegmentKind {
    /// Classify a template segment.
    #[must_use]
    pub fn classify(segment: &str) -> Self {
        match param_name(segment) {
            Some(name) => SegmentKind::Param {
                name: Arc::from(name),
            },
            None => SegmentKind::Literal,
        }
    }

    /// Returns `true` for parameter segments.
    #[inline]
    #[must_use]
    pub fn is_param(&self) -> bool {
        matches!(self, SegmentKind::Param { .. })
    }
}

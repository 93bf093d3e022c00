use http::Method;
use std::fmt;

/// Error returned by path tree lookups and child-list primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathTreeError {
    /// The path does not resolve against the tree
    ///
    /// Either the first segment does not equal the root's name or some segment
    /// has no matching child. No partial match is ever returned.
    InvalidPath {
        /// The offending path
        path: String,
    },
    /// Registration would write through a parameter node bound to other text
    ///
    /// The last segment of `path` was matched by the earlier parameter sibling
    /// `param`, so the data would land on that parameter's route instead.
    Absorbed {
        /// The template being registered
        path: String,
        /// The parameter segment that matched first (e.g. `{id}`)
        param: String,
    },
    /// A child-list primitive was given an index outside the child list
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// Number of children at the time of the call
        len: usize,
    },
}

impl PathTreeError {
    pub(crate) fn invalid_path(path: &str) -> Self {
        PathTreeError::InvalidPath {
            path: path.to_owned(),
        }
    }
}

impl fmt::Display for PathTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathTreeError::InvalidPath { path } => {
                write!(f, "invalid path '{}': no matching node", path)
            }
            PathTreeError::Absorbed { path, param } => {
                write!(
                    f,
                    "path '{}' is absorbed by parameter segment '{}' registered before it",
                    path, param
                )
            }
            PathTreeError::IndexOutOfRange { index, len } => {
                write!(
                    f,
                    "child index {} out of range for node with {} children",
                    index, len
                )
            }
        }
    }
}

impl std::error::Error for PathTreeError {}

/// Error returned when adding a route to a [`crate::router::Router`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// The HTTP method is not one the router namespaces routes under
    UnsupportedMethod {
        /// The rejected method
        method: Method,
    },
    /// The route template could not be placed in the tree
    Tree(PathTreeError),
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::UnsupportedMethod { method } => {
                write!(f, "unsupported HTTP method '{}'", method)
            }
            RouterError::Tree(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RouterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouterError::Tree(err) => Some(err),
            RouterError::UnsupportedMethod { .. } => None,
        }
    }
}

impl From<PathTreeError> for RouterError {
    fn from(err: PathTreeError) -> Self {
        RouterError::Tree(err)
    }
}

//! Path resolution over loaded documents
//!
//! Both source formats answer the same two questions: is a path anchored at
//! the document root, and which nodes does it select from a given context
//! node. The extraction engine is written once against [`PathResolver`] and
//! never inspects the underlying document type.

pub mod json;
pub mod xml;

use thiserror::Error;

/// A malformed path expression.
///
/// Only the JSON dialect reports these; the XML dialect treats anything it
/// cannot interpret as a non-match.
#[derive(Debug, Clone, Error)]
#[error("Invalid path expression `{path}`: {reason}")]
pub struct PathError {
    pub path: String,
    pub reason: String,
}

impl PathError {
    pub(crate) fn new(path: &str, reason: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

/// One node selected by a path expression.
#[derive(Debug, Clone)]
pub struct PathMatch<N> {
    /// The selected node, usable as context for further resolution.
    pub node: N,
    /// Scalar text carried by the node, if any.
    pub value: Option<String>,
}

/// Read-only navigation over one loaded document.
pub trait PathResolver {
    /// Handle to a node of the underlying document.
    type Node: Clone;

    /// The context representing the document root.
    fn root(&self) -> Self::Node;

    /// Whether `path` is evaluated from the document root rather than from
    /// the context node it is handed.
    fn is_absolute(&self, path: &str) -> bool;

    /// Select every node `path` designates from `context`, in document
    /// order. Valid paths that match nothing yield an empty vec.
    fn resolve(
        &self,
        context: &Self::Node,
        path: &str,
    ) -> Result<Vec<PathMatch<Self::Node>>, PathError>;
}

// Re-export commonly used types
pub use json::JsonPathResolver;
pub use xml::XmlPathResolver;

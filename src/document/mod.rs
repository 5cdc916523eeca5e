//! Document loading
//!
//! Whole-file loaders for the two source formats:
//! - XML files become an arena tree with parent back-references
//! - JSON files become an owned `serde_json::Value`
//!
//! Documents are read fully into memory; there is no streaming mode.

pub mod json;
pub mod xml;

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a source document.
///
/// These propagate from the single-document API; the batch layer catches
/// them per file.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed XML: {0}")]
    MalformedXml(String),
    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("Document has no root element")]
    NoRoot,
}

// Re-export commonly used types
pub use json::JsonDocument;
pub use xml::{NodeId, XmlDocument, XmlNode};

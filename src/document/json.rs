//! JSON document wrapper

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::DocumentError;

/// A JSON document held as one owned parsed value.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    root: Value,
}

impl JsonDocument {
    /// Parse a document from its textual content.
    pub fn parse_str(content: &str) -> Result<Self, DocumentError> {
        let root = serde_json::from_str(content)?;
        Ok(Self { root })
    }

    /// Read and parse a document from disk.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&content)
    }

    /// The root value.
    pub fn root(&self) -> &Value {
        &self.root
    }
}

impl From<Value> for JsonDocument {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

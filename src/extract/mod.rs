//! Row extraction
//!
//! The core transform: one [`Record`] per row-selector match, in document
//! order. Scalar data fields come first, nested fields merge over them
//! (keeping the original column position on a name clash), and metadata
//! resolved once against the document root is applied to the whole table
//! last.
//!
//! Everything below document loading is best-effort: a field that cannot be
//! resolved becomes a null cell and a warning, never an error.

pub mod nested;
pub mod table;

use std::path::Path;

use tracing::{error, warn};

use crate::config::FluxConfig;
use crate::document::{DocumentError, JsonDocument, XmlDocument};
use crate::path::{JsonPathResolver, PathResolver, XmlPathResolver};

// Re-export commonly used types
pub use nested::resolve_nested;
pub use table::{Record, Table};

/// Flatten one parsed document into a table.
pub fn extract_rows<R: PathResolver>(resolver: &R, config: &FluxConfig) -> Table {
    let root = resolver.root();

    let mut metadata: Vec<(String, Option<String>)> = Vec::new();
    for (name, path) in &config.metadata_fields {
        match resolver.resolve(&root, path) {
            Ok(matches) => {
                if let Some(found) = matches.into_iter().next() {
                    metadata.push((name.clone(), found.value));
                }
            }
            Err(e) => warn!("Metadata field `{}` not extracted: {}", name, e),
        }
    }

    let row_nodes = match resolver.resolve(&root, &config.row_level) {
        Ok(matches) => matches,
        Err(e) => {
            error!("Row selector `{}` failed: {}", config.row_level, e);
            return Table::new();
        }
    };

    let mut table = Table::new();
    for row in &row_nodes {
        let mut record = Record::new();
        for (name, path) in &config.data_fields {
            let value = match resolver.resolve(&row.node, path) {
                Ok(matches) => matches.into_iter().next().and_then(|m| m.value),
                Err(e) => {
                    warn!("Data field `{}` not extracted: {}", name, e);
                    None
                }
            };
            record.insert(name.clone(), value);
        }
        for rule in &config.nested_fields {
            for (key, value) in resolve_nested(resolver, &row.node, rule) {
                record.insert(key, Some(value));
            }
        }
        table.push_record(record);
    }

    for (name, value) in &metadata {
        table.set_column(name, value.as_deref());
    }
    table
}

/// Flatten one XML file. Parse and IO failures propagate; the batch layer
/// catches them per file.
pub fn xml_to_table(path: &Path, config: &FluxConfig) -> Result<Table, DocumentError> {
    let document = XmlDocument::from_file(path)?;
    let resolver = XmlPathResolver::new(&document);
    Ok(extract_rows(&resolver, config))
}

/// Flatten one JSON file.
pub fn json_to_table(path: &Path, config: &FluxConfig) -> Result<Table, DocumentError> {
    let document = JsonDocument::from_file(path)?;
    let resolver = JsonPathResolver::new(&document);
    Ok(extract_rows(&resolver, config))
}

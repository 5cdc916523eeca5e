//! Fluxtab - Configuration-driven flattening of flux documents
//!
//! Turns semi-structured energy-metering documents (XML and JSON) into flat
//! tables according to per-flux-type extraction rules:
//! - Document loading (XML arena, JSON tree)
//! - Path resolution dialects over both document kinds
//! - Row/field/nested-rule extraction into ordered tables
//! - YAML flux configuration with embedded defaults
//! - Batch processing with per-file error isolation
//! - Incremental runs backed by CSV history and accumulated tables

pub mod batch;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod document;
pub mod extract;
pub mod flux;
pub mod path;
pub mod store;

// Re-export commonly used types
pub use document::{DocumentError, JsonDocument, XmlDocument};
pub use path::{JsonPathResolver, PathError, PathMatch, PathResolver, XmlPathResolver};

pub use extract::{Record, Table, extract_rows, json_to_table, xml_to_table};

pub use config::{
    Condition, ConfigError, FluxConfig, NestedField, SourceFormat, default_configs,
    load_config_file, load_flux_config,
};

pub use batch::{find_source_files, process_directory, process_files};
pub use store::{HistoryEntry, StoreError};

pub use flux::{FluxError, iterative_process_flux, process_flux, reset_flux};

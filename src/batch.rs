//! Batch aggregation
//!
//! Recursive source-file discovery plus per-file extraction with error
//! isolation: one unreadable or malformed file is logged and skipped, the
//! rest of the batch still contributes rows.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{error, info, warn};
use walkdir::WalkDir;

use crate::config::{FluxConfig, SourceFormat};
use crate::extract::{Table, json_to_table, xml_to_table};

/// Recursively collect files under `dir` with the given extension.
///
/// `exclude` drops files by exact file name before `file_pattern` is
/// searched against the file name. Unreadable directory entries are logged
/// and skipped; a missing directory yields an empty list.
pub fn find_source_files(
    dir: &Path,
    extension: &str,
    file_pattern: Option<&Regex>,
    exclude: Option<&HashSet<String>>,
) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if exclude.is_some_and(|set| set.contains(name.as_ref())) {
            continue;
        }
        if file_pattern.is_some_and(|pattern| !pattern.is_match(&name)) {
            continue;
        }
        files.push(path.to_path_buf());
    }
    info!(
        "Found {} {} file(s) under {}",
        files.len(),
        extension,
        dir.display()
    );
    files
}

/// Extract every file of a batch, skipping the ones that fail.
pub fn process_files(files: &[PathBuf], config: &FluxConfig) -> Table {
    let mut tables = Vec::new();
    for file in files {
        let result = match config.source {
            SourceFormat::Xml => xml_to_table(file, config),
            SourceFormat::Json => json_to_table(file, config),
        };
        match result {
            Ok(table) => tables.push(table),
            Err(e) => error!("Error processing {}: {}", file.display(), e),
        }
    }
    Table::concat(tables)
}

/// Discover and extract a whole directory.
pub fn process_directory(
    dir: &Path,
    config: &FluxConfig,
    file_pattern: Option<&Regex>,
    exclude: Option<&HashSet<String>>,
) -> Table {
    let files = find_source_files(dir, config.source.extension(), file_pattern, exclude);
    process_files(&files, config)
}

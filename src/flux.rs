//! Flux processing drivers
//!
//! Ties configuration, batch extraction and the CSV store together:
//! - [`process_flux`] runs a one-shot batch over a directory
//! - [`iterative_process_flux`] only picks up files not yet in the history
//!   and grows an accumulated per-flux table
//! - [`reset_flux`] clears the persisted state

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::batch::{find_source_files, process_files};
use crate::config::{ConfigError, load_flux_config};
use crate::extract::Table;
use crate::store::{
    StoreError, append_to_data, append_to_history, load_history, read_table, remove_store_file,
};

/// Errors raised by the flux drivers.
#[derive(Error, Debug)]
pub enum FluxError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// File name of the processing history kept next to the source files.
pub const HISTORY_FILE: &str = "history.csv";

fn history_path(dir: &Path) -> PathBuf {
    dir.join(HISTORY_FILE)
}

fn data_path(dir: &Path, flux_type: &str) -> PathBuf {
    dir.join(format!("{}.csv", flux_type))
}

/// One-shot batch over every matching file under `dir`.
pub fn process_flux(
    flux_type: &str,
    dir: &Path,
    config_path: Option<&Path>,
) -> Result<Table, FluxError> {
    let config = load_flux_config(flux_type, config_path)?;
    let pattern = config.compiled_file_regex()?;
    let files = find_source_files(dir, config.source.extension(), pattern.as_ref(), None);
    Ok(process_files(&files, &config))
}

/// Incremental run over `dir`.
///
/// Files whose names appear in `dir/history.csv` are skipped. Rows from the
/// remaining files are appended to `dir/{flux_type}.csv`, the file names are
/// recorded in the history, and the full accumulated table is returned. With
/// nothing new to process the stored table is returned unchanged.
pub fn iterative_process_flux(
    flux_type: &str,
    dir: &Path,
    config_path: Option<&Path>,
) -> Result<Table, FluxError> {
    let config = load_flux_config(flux_type, config_path)?;
    let pattern = config.compiled_file_regex()?;

    let history = history_path(dir);
    let data = data_path(dir, flux_type);

    let processed: HashSet<String> = load_history(&history)?
        .into_iter()
        .map(|entry| entry.file)
        .collect();
    if !processed.is_empty() {
        info!(
            "Skipping {} already processed file(s) for flux {}",
            processed.len(),
            flux_type
        );
    }

    let files = find_source_files(
        dir,
        config.source.extension(),
        pattern.as_ref(),
        Some(&processed),
    );
    if files.is_empty() {
        return Ok(read_table(&data)?);
    }

    let new_rows = process_files(&files, &config);
    let combined = append_to_data(&data, new_rows)?;

    let names: Vec<String> = files
        .iter()
        .filter_map(|file| file.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    append_to_history(&history, &names)?;

    info!(
        "Flux {}: {} new file(s), {} accumulated row(s)",
        flux_type,
        files.len(),
        combined.len()
    );
    Ok(combined)
}

/// Remove the accumulated table and the history for a flux type.
pub fn reset_flux(flux_type: &str, dir: &Path) -> Result<(), FluxError> {
    remove_store_file(&data_path(dir, flux_type))?;
    remove_store_file(&history_path(dir))?;
    Ok(())
}

//! CSV persistence
//!
//! Stores the accumulated table and the processing history that the
//! incremental driver relies on:
//! - `{flux}.csv` holds every extracted row seen so far
//! - `history.csv` records which file names were already processed, and when
//!
//! All table cells are read back as strings; empty cells become `None`.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::extract::{Record, Table};

/// Errors raised by the CSV store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One processed file, identified by file name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub file: String,
    pub processed_at: NaiveDateTime,
}

/// Load the processing history, or an empty one if the file does not exist.
pub fn load_history(path: &Path) -> Result<Vec<HistoryEntry>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut entries = Vec::new();
    for record in reader.deserialize() {
        entries.push(record?);
    }
    Ok(entries)
}

/// Record the given file names as processed now.
pub fn append_to_history(path: &Path, files: &[String]) -> Result<(), StoreError> {
    if files.is_empty() {
        return Ok(());
    }
    let mut entries = load_history(path)?;
    let now = Local::now().naive_local();
    for file in files {
        entries.push(HistoryEntry {
            file: file.clone(),
            processed_at: now,
        });
    }
    let mut writer = csv::Writer::from_path(path)?;
    for entry in &entries {
        writer.serialize(entry)?;
    }
    writer.flush().map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Recorded {} file(s) in {}", files.len(), path.display());
    Ok(())
}

/// Read a stored table, or an empty one if the file does not exist.
pub fn read_table(path: &Path) -> Result<Table, StoreError> {
    if !path.exists() {
        return Ok(Table::new());
    }
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let mut table = Table::new();
    for header in &headers {
        table.ensure_column(header);
    }
    for result in reader.records() {
        let record = result?;
        let mut row = Record::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            let value = if cell.is_empty() {
                None
            } else {
                Some(cell.to_string())
            };
            row.insert(header.clone(), value);
        }
        table.push_record(row);
    }
    Ok(table)
}

/// Write a table, one header row plus one line per record.
///
/// Missing cells are written as empty strings.
pub fn write_table(path: &Path, table: &Table) -> Result<(), StoreError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.columns())?;
    for row in table.rows() {
        let cells: Vec<&str> = table
            .columns()
            .iter()
            .map(|column| {
                row.get(column)
                    .and_then(|value| value.as_deref())
                    .unwrap_or("")
            })
            .collect();
        writer.write_record(&cells)?;
    }
    writer.flush().map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Append new rows to a stored table and return the combined result.
pub fn append_to_data(path: &Path, new_rows: Table) -> Result<Table, StoreError> {
    let mut combined = read_table(path)?;
    combined.append(new_rows);
    write_table(path, &combined)?;
    Ok(combined)
}

/// Delete a store file, ignoring a missing one.
pub fn remove_store_file(path: &Path) -> Result<(), StoreError> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            info!("Removed {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

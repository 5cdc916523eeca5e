//! CLI-specific error types

use thiserror::Error;

use crate::config::ConfigError;
use crate::flux::FluxError;
use crate::store::StoreError;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Flux error: {0}")]
    FluxError(#[from] FluxError),

    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

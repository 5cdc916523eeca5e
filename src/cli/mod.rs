//! CLI support for the fluxtab binary

pub mod commands;
pub mod error;

pub use error::CliError;

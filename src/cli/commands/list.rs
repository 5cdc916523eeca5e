//! List command implementation

use std::path::Path;

use crate::cli::error::CliError;
use crate::config::{default_configs, load_config_file};

/// Handle the list command
pub fn handle_list(config: Option<&Path>) -> Result<(), CliError> {
    let configs = match config {
        Some(path) => load_config_file(path)?,
        None => default_configs()?,
    };

    for (flux_type, flux) in &configs {
        println!(
            "{}: {} ({} data field(s), {} nested rule(s))",
            flux_type,
            flux.row_level,
            flux.data_fields.len(),
            flux.nested_fields.len()
        );
    }
    Ok(())
}

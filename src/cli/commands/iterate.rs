//! Iterate command implementation

use std::path::Path;

use crate::cli::error::CliError;
use crate::flux::iterative_process_flux;

/// Handle the iterate command
pub fn handle_iterate(
    flux_type: &str,
    directory: &Path,
    config: Option<&Path>,
) -> Result<(), CliError> {
    if !directory.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Not a directory: {}",
            directory.display()
        )));
    }

    let table = iterative_process_flux(flux_type, directory, config)?;
    println!("Flux {}: {} accumulated row(s)", flux_type, table.len());
    Ok(())
}

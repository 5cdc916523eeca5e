//! Reset command implementation

use std::path::Path;

use crate::cli::error::CliError;
use crate::flux::reset_flux;

/// Handle the reset command
pub fn handle_reset(flux_type: &str, directory: &Path) -> Result<(), CliError> {
    reset_flux(flux_type, directory)?;
    println!("Cleared stored state for flux {}", flux_type);
    Ok(())
}

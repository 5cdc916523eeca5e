//! Convert command implementation

use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::extract::Table;
use crate::flux::process_flux;
use crate::store::write_table;

/// Arguments for the convert command
pub struct ConvertArgs {
    pub flux_type: String,
    pub directory: PathBuf,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Handle the convert command
pub fn handle_convert(args: &ConvertArgs) -> Result<(), CliError> {
    if !args.directory.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Not a directory: {}",
            args.directory.display()
        )));
    }

    let table = process_flux(&args.flux_type, &args.directory, args.config.as_deref())?;

    match &args.output {
        Some(path) => {
            write_table(path, &table)?;
            println!("Wrote {} row(s) to {}", table.len(), path.display());
        }
        None => print_table(&table)?,
    }
    Ok(())
}

/// Write a table as CSV to stdout
fn print_table(table: &Table) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer
        .write_record(table.columns())
        .map_err(|e| CliError::IoError(e.to_string()))?;
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
        writer
            .write_record(&cells)
            .map_err(|e| CliError::IoError(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| CliError::IoError(e.to_string()))?;
    Ok(())
}

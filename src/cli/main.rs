//! CLI binary entry point for fluxtab

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use fluxtab::cli::commands::convert::{ConvertArgs, handle_convert};
#[cfg(feature = "cli")]
use fluxtab::cli::commands::iterate::handle_iterate;
#[cfg(feature = "cli")]
use fluxtab::cli::commands::list::handle_list;
#[cfg(feature = "cli")]
use fluxtab::cli::commands::reset::handle_reset;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "fluxtab")]
#[command(about = "Flatten flux documents into flat CSV tables")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Process every matching file in a directory once
    Convert {
        /// Flux type to process (e.g. R15, C15, F12)
        flux_type: String,
        /// Directory containing the source files
        directory: PathBuf,
        /// Custom flux configuration file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write the table to this CSV file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Process files not seen before and grow the accumulated table
    Iterate {
        /// Flux type to process
        flux_type: String,
        /// Directory containing the source files and the stored state
        directory: PathBuf,
        /// Custom flux configuration file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Clear the accumulated table and history for a flux type
    Reset {
        /// Flux type to reset
        flux_type: String,
        /// Directory holding the stored state
        directory: PathBuf,
    },
    /// List the configured flux types
    List {
        /// Custom flux configuration file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            flux_type,
            directory,
            config,
            output,
        } => {
            let args = ConvertArgs {
                flux_type,
                directory,
                config,
                output,
            };
            handle_convert(&args)
        }
        Commands::Iterate {
            flux_type,
            directory,
            config,
        } => handle_iterate(&flux_type, &directory, config.as_deref()),
        Commands::Reset {
            flux_type,
            directory,
        } => handle_reset(&flux_type, &directory),
        Commands::List { config } => handle_list(config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}

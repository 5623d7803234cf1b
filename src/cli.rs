//! Command-line interface: `parse` and `convert` subcommands.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::reader::DocumentReader;
use crate::writer::DocumentWriter;

/// Parse and regenerate structured dev-doc markdown files
#[derive(Parser, Debug)]
#[command(name = "devdoc", version, about)]
pub struct Cli {
    /// Optional TOML configuration file with writer defaults
    #[arg(long, global = true, env = "DEVDOC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a dev-doc file and print the record as JSON
    Parse {
        /// Path to the markdown file
        input: PathBuf,
    },

    /// Parse a dev-doc file and regenerate it at a new location
    Convert {
        /// Path to the input markdown file
        input: PathBuf,

        /// Path for the regenerated output
        output: PathBuf,
    },
}

/// Execute a parsed command line. Errors map to a non-zero process exit.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let reader = DocumentReader::new();

    match cli.command {
        Commands::Parse { input } => {
            let Some(record) = reader.read(&input)? else {
                bail!("file not found: {}", input.display());
            };
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Convert { input, output } => {
            let Some(record) = reader.read(&input)? else {
                bail!("could not parse input file: {}", input.display());
            };
            if record.is_empty() {
                bail!("no dev-doc content in input file: {}", input.display());
            }
            let writer = DocumentWriter::with_defaults(config.defaults);
            writer.write(&record, &output)?;
            println!("regenerated {} -> {}", input.display(), output.display());
        }
    }

    Ok(())
}

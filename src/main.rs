use anyhow::Result;
use clap::Parser;
use devdoc::cli::{self, Cli};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    cli::run(Cli::parse())
}

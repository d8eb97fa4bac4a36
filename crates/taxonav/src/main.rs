//! `taxonav` binary entry point.

mod cli;
mod commands;
mod config;
mod error;
mod output;
mod taxonomy;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, GlobalOpts};

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    match &cli.command {
        Command::Render(args) => commands::render::handle(args, &cli.global)?,
        Command::Categories(args) => commands::categories::handle(args, &cli.global)?,
    }
    Ok(())
}

/// Logging to stderr; `RUST_LOG` wins over the `-v`/`-q` flags.
fn init_tracing(global: &GlobalOpts) {
    let default_level = if global.quiet {
        "error"
    } else {
        match global.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

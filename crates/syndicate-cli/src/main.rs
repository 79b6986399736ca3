//! Syndicate CLI - Command-line interface for bond issuance pricing.
//!
//! # Usage
//!
//! ```bash
//! # Price a deal
//! syndicate price --company "ABC Corporation" --sector utility --rating AA --size 500
//!
//! # Same deal as JSON, against a custom tables file
//! syndicate --format json price --sector bank --rating A --size 750 --tables desk.toml
//!
//! # Reference data
//! syndicate rates
//! syndicate spreads industrial BBB
//! syndicate options
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands, Context};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so piped output stays clean
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let ctx = Context {
        format: cli.format,
        quiet: cli.quiet,
        tables: cli.tables,
    };

    // Execute command
    match cli.command {
        Commands::Price(args) => commands::price::execute(args, &ctx)?,
        Commands::Rates => commands::rates::execute(&ctx)?,
        Commands::Spreads(args) => commands::spreads::execute(args, &ctx)?,
        Commands::Options => commands::options::execute(&ctx)?,
    }

    Ok(())
}

//! CLI argument definitions.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use syndicate_pricing::{PricingCalculator, ReferenceData};

use crate::commands::{PriceArgs, SpreadsArgs};
use crate::error::CliResult;

/// Syndicate - Indicative bond issuance pricing CLI
#[derive(Parser)]
#[command(name = "syndicate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress headers and notes
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Reference tables file (TOML) replacing the built-in tables
    #[arg(short, long, global = true, env = "SYNDICATE_REFERENCE_DATA")]
    pub tables: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price an issuance across GBP, EUR and USD
    Price(PriceArgs),

    /// Show government base rates
    Rates,

    /// Show credit spreads for a sector and rating
    Spreads(SpreadsArgs),

    /// List accepted sectors, ratings, currencies and market conditions
    Options,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
    pub tables: Option<PathBuf>,
}

impl Context {
    /// Reference tables for this run: the `--tables` file, or the built-in set.
    pub fn reference_data(&self) -> CliResult<Arc<ReferenceData>> {
        match &self.tables {
            Some(path) => {
                tracing::debug!("loading reference tables from {}", path.display());
                Ok(Arc::new(ReferenceData::from_file(path)?))
            }
            None => Ok(ReferenceData::standard()),
        }
    }

    /// Calculator over this run's reference tables.
    pub fn calculator(&self) -> CliResult<PricingCalculator> {
        Ok(PricingCalculator::new(self.reference_data()?))
    }

    /// Whether section headers should be printed.
    pub fn show_headers(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Table
    }
}

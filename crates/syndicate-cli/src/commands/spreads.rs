//! Spreads command implementation.
//!
//! Shows the credit spread per currency for a sector and rating.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use syndicate_core::{CreditRating, Sector};

use crate::cli::{Context, OutputFormat};
use crate::output::{print_header, print_output, print_single};

/// Arguments for the spreads command.
#[derive(Args, Debug)]
pub struct SpreadsArgs {
    /// Issuer sector (utility, bank, industrial)
    pub sector: Sector,

    /// Credit rating (AAA, AA, A, BBB, or Moody's notation)
    pub rating: CreditRating,
}

#[derive(Debug, Serialize, Tabled)]
struct SpreadRow {
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Credit Spread")]
    spread: String,
    #[tabled(skip)]
    spread_bps: i32,
}

/// Execute the spreads command.
pub fn execute(args: SpreadsArgs, ctx: &Context) -> Result<()> {
    let data = ctx.reference_data()?;
    let spreads = data.spreads_for(args.sector, args.rating);

    if ctx.format == OutputFormat::Json {
        print_single(spreads)?;
        return Ok(());
    }

    let rows: Vec<SpreadRow> = spreads
        .iter()
        .map(|(currency, bps)| SpreadRow {
            currency: currency.code().to_string(),
            spread: bps.to_string(),
            spread_bps: bps.value(),
        })
        .collect();

    if ctx.show_headers() {
        print_header(&format!(
            "Credit Spreads: {} {} ({})",
            args.sector.name(),
            args.rating.sp_notation(),
            args.rating.moodys_notation(),
        ));
    }
    print_output(&rows, ctx.format)?;
    Ok(())
}

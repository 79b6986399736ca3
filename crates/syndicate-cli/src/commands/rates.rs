//! Rates command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{Context, OutputFormat};
use crate::output::{format_percent, print_header, print_output, print_single};

#[derive(Debug, Serialize, Tabled)]
struct RateRow {
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Government Rate")]
    rate: String,
}

/// Execute the rates command.
pub fn execute(ctx: &Context) -> Result<()> {
    let data = ctx.reference_data()?;
    let rates = data.government_rates();

    if ctx.format == OutputFormat::Json {
        print_single(rates)?;
        return Ok(());
    }

    let rows: Vec<RateRow> = rates
        .iter()
        .map(|(currency, rate)| RateRow {
            currency: currency.code().to_string(),
            name: currency.name().to_string(),
            rate: format_percent(*rate, 2),
        })
        .collect();

    if ctx.show_headers() {
        print_header("Government Base Rates");
    }
    print_output(&rows, ctx.format)?;
    Ok(())
}

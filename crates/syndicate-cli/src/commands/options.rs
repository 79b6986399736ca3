//! Options command implementation.
//!
//! Lists every value accepted for the categorical request fields.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use syndicate_core::{CreditRating, Currency, MarketCondition, Sector};

use crate::cli::Context;
use crate::output::{print_header, print_output};

#[derive(Debug, Serialize, Tabled)]
struct OptionRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Label")]
    label: String,
}

impl OptionRow {
    fn new(field: &'static str, value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            label: label.into(),
        }
    }
}

fn option_rows() -> Vec<OptionRow> {
    let sectors = Sector::ALL
        .into_iter()
        .map(|s| OptionRow::new("sector", s.as_str(), s.name()));
    let ratings = CreditRating::ALL.into_iter().map(|r| {
        OptionRow::new(
            "rating",
            r.sp_notation(),
            format!("{} / {}", r.sp_notation(), r.moodys_notation()),
        )
    });
    let currencies = Currency::ALL
        .into_iter()
        .map(|c| OptionRow::new("currency", c.code(), c.name()));
    let conditions = MarketCondition::ALL
        .into_iter()
        .map(|m| OptionRow::new("market_condition", m.as_str(), m.label()));

    sectors
        .chain(ratings)
        .chain(currencies)
        .chain(conditions)
        .collect()
}

/// Execute the options command.
pub fn execute(ctx: &Context) -> Result<()> {
    if ctx.show_headers() {
        print_header("Accepted Values");
    }
    print_output(&option_rows(), ctx.format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_rows_cover_every_enum() {
        let rows = option_rows();
        assert_eq!(rows.len(), 3 + 4 + 3 + 4);
        assert!(rows
            .iter()
            .any(|r| r.field == "market_condition" && r.label == "Central Bank Meeting"));
        assert!(rows.iter().any(|r| r.field == "rating" && r.label == "AA / Aa2"));
    }
}

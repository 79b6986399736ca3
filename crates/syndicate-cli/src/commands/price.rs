//! Price command implementation.
//!
//! Runs the full pricing analysis for one issuance request.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use syndicate_core::{CreditRating, Currency, MarketCondition, Sector};
use syndicate_pricing::{BondRequest, PricingAnalysis};

use crate::cli::{Context, OutputFormat};
use crate::output::{
    format_millions, format_percent, print_header, print_highlight, print_output, print_single,
    print_table, KeyValue,
};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Issuer name
    #[arg(short, long, default_value = "Issuer")]
    pub company: String,

    /// Issuer sector (utility, bank, industrial)
    #[arg(short, long)]
    pub sector: Sector,

    /// Credit rating (AAA, AA, A, BBB)
    #[arg(short, long)]
    pub rating: CreditRating,

    /// Deal size in millions
    #[arg(long = "size")]
    pub deal_size_million: u32,

    /// Market condition (quiet_week, busy_week, central_bank_meeting, normal)
    #[arg(short, long, default_value = "normal")]
    pub market: MarketCondition,

    /// Currency the issuer would like to print in
    #[arg(long, default_value = "GBP")]
    pub preferred_currency: Currency,

    /// Currency costs are expressed in
    #[arg(short, long, default_value = "GBP")]
    pub base_currency: Currency,
}

impl PriceArgs {
    fn to_request(&self) -> BondRequest {
        BondRequest::new(
            self.company.clone(),
            self.sector,
            self.rating,
            self.deal_size_million,
            self.market,
        )
        .with_preferred_currency(self.preferred_currency)
        .with_base_currency(self.base_currency)
    }
}

/// One currency line of the comparison.
#[derive(Debug, Serialize, Tabled)]
struct CurrencyRow {
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Gov Rate")]
    government_rate: String,
    #[tabled(rename = "Credit")]
    credit_spread: String,
    #[tabled(rename = "Size")]
    size_premium: String,
    #[tabled(rename = "Market")]
    market_adjustment: String,
    #[tabled(rename = "Swap")]
    swap_cost: String,
    #[tabled(rename = "All-in")]
    all_in_cost: String,
    #[tabled(rename = "Annual")]
    annual_cost: String,
    #[tabled(rename = "10 Year")]
    ten_year_cost: String,
}

fn currency_rows(analysis: &PricingAnalysis) -> Vec<CurrencyRow> {
    analysis
        .currency_comparison
        .iter()
        .map(|p| {
            let projection = analysis.financial_impact.cost(p.currency);
            CurrencyRow {
                currency: p.currency.to_string(),
                government_rate: p.breakdown.government_rate.clone(),
                credit_spread: p.breakdown.credit_spread.clone(),
                size_premium: p.breakdown.size_premium.clone(),
                market_adjustment: p.breakdown.market_adjustment.clone(),
                swap_cost: p.breakdown.swap_cost.clone(),
                all_in_cost: format_percent(p.all_in_cost_percent, 3),
                annual_cost: projection
                    .map(|c| format_millions(c.annual_cost_millions))
                    .unwrap_or_default(),
                ten_year_cost: projection
                    .map(|c| format_millions(c.ten_year_cost_millions))
                    .unwrap_or_default(),
            }
        })
        .collect()
}

fn recommendation_rows(analysis: &PricingAnalysis) -> Vec<KeyValue> {
    let rec = &analysis.recommendations;
    let mut rows = vec![
        KeyValue::new("Optimal Currency", rec.optimal_currency.to_string()),
        KeyValue::new("Rationale", rec.rationale.clone()),
        KeyValue::new("Market Timing", rec.market_timing.clone()),
    ];

    for (i, strategy) in rec.alternative_strategies.iter().enumerate() {
        rows.push(KeyValue::new(format!("Alternative {}", i + 1), strategy.clone()));
    }

    if let Some(savings) = &analysis.financial_impact.recommendation {
        rows.push(KeyValue::new(
            "Savings vs Base",
            savings.savings_vs_base_bps.to_string(),
        ));
        rows.push(KeyValue::new(
            "Annual Savings",
            format_millions(savings.annual_savings_millions),
        ));
        rows.push(KeyValue::new(
            "10 Year Savings",
            format_millions(savings.ten_year_savings_millions),
        ));
    }

    rows
}

/// Execute the price command.
pub fn execute(args: PriceArgs, ctx: &Context) -> Result<()> {
    let calculator = ctx.calculator()?;
    let request = args.to_request();
    let analysis = calculator.analyze(&request)?;

    match ctx.format {
        OutputFormat::Json => print_single(&analysis)?,
        OutputFormat::Csv => print_output(&currency_rows(&analysis), OutputFormat::Csv)?,
        OutputFormat::Minimal => {
            let optimal = analysis.optimal_currency();
            let cost = analysis
                .pricing_for(optimal)
                .map(|p| format_percent(p.all_in_cost_percent, 3))
                .unwrap_or_default();
            println!("{} {}", optimal, cost);
        }
        OutputFormat::Table => {
            if ctx.show_headers() {
                print_header(&format!(
                    "{} | {} {} | {}m | {}",
                    analysis.company_name,
                    request.sector.name(),
                    request.rating,
                    request.deal_size_million,
                    request.market_condition.label(),
                ));
            }
            print_table(&currency_rows(&analysis))?;

            if ctx.show_headers() {
                print_header("Recommendation");
            }
            print_table(&recommendation_rows(&analysis))?;

            if ctx.show_headers() {
                println!();
                print_highlight(&format!(
                    "Costs expressed in {}; savings measured against {}",
                    request.base_currency,
                    analysis
                        .currency_comparison
                        .first()
                        .map_or(request.base_currency, |p| p.currency),
                ));
            }
        }
    }

    Ok(())
}

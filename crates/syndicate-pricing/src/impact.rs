//! Cost projections and savings against the base case.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use syndicate_core::types::{BasisPoints, Currency};

use crate::pricing::CurrencyPricing;

/// Decimal places kept on money figures (millions).
pub const MILLIONS_DP: u32 = 1;

/// Horizon of the long-dated projection, in years.
pub const PROJECTION_YEARS: u32 = 10;

/// Interest cost of one currency option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostProjection {
    /// Annual coupon cost in millions.
    pub annual_cost_millions: Decimal,
    /// Ten-year coupon cost in millions.
    pub ten_year_cost_millions: Decimal,
}

/// Savings from switching to the cheapest currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsRecommendation {
    /// Cheapest currency.
    pub optimal_currency: Currency,
    /// All-in cost saved versus the base case, truncated to whole bps.
    pub savings_vs_base_bps: BasisPoints,
    /// Annual saving in millions.
    pub annual_savings_millions: Decimal,
    /// Ten-year saving in millions.
    pub ten_year_savings_millions: Decimal,
}

/// Cost projections per currency, plus the switch recommendation when the
/// base case is not already cheapest.
///
/// Serializes flat: `{"GBP": {...}, "EUR": {...}, "USD": {...}, "recommendation": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialImpact {
    /// Projection per priced currency.
    #[serde(flatten)]
    pub costs: BTreeMap<Currency, CostProjection>,
    /// Present only when the cheapest currency differs from the base case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<SavingsRecommendation>,
}

impl FinancialImpact {
    /// Projects costs for each priced currency.
    ///
    /// The first entry of `pricings` is the base case that savings are
    /// measured against.
    pub fn project(deal_size_million: u32, pricings: &[CurrencyPricing]) -> Self {
        let deal_size = Decimal::from(deal_size_million);

        let costs = pricings
            .iter()
            .map(|p| (p.currency, project_cost(deal_size, p.all_in_cost_percent)))
            .collect();

        let recommendation = match (pricings.first(), cheapest(pricings)) {
            (Some(base), Some(best)) if best.currency != base.currency => {
                let saving = base.all_in_cost_percent - best.all_in_cost_percent;
                let projected = project_cost(deal_size, saving);
                Some(SavingsRecommendation {
                    optimal_currency: best.currency,
                    savings_vs_base_bps: percent_to_whole_bps(saving),
                    annual_savings_millions: projected.annual_cost_millions,
                    ten_year_savings_millions: projected.ten_year_cost_millions,
                })
            }
            _ => None,
        };

        Self {
            costs,
            recommendation,
        }
    }

    /// Returns the projection for a currency, if it was priced.
    pub fn cost(&self, currency: Currency) -> Option<&CostProjection> {
        self.costs.get(&currency)
    }
}

/// The lowest all-in cost; exact ties go to the earliest entry.
pub fn cheapest(pricings: &[CurrencyPricing]) -> Option<&CurrencyPricing> {
    pricings.iter().min_by_key(|p| p.all_in_cost_percent)
}

fn project_cost(deal_size: Decimal, rate_percent: Decimal) -> CostProjection {
    let annual = deal_size * rate_percent / Decimal::ONE_HUNDRED;
    CostProjection {
        annual_cost_millions: annual.round_dp(MILLIONS_DP),
        ten_year_cost_millions: (annual * Decimal::from(PROJECTION_YEARS)).round_dp(MILLIONS_DP),
    }
}

fn percent_to_whole_bps(percent: Decimal) -> BasisPoints {
    let bps = (percent * Decimal::ONE_HUNDRED).trunc();
    BasisPoints::new(bps.to_i32().unwrap_or_default())
}

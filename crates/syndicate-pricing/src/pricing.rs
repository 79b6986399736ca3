//! Per-currency all-in cost results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use syndicate_core::types::{BasisPoints, Currency};

/// Decimal places kept on the all-in cost.
pub const ALL_IN_COST_DP: u32 = 3;

/// All-in cost of issuing in one currency, with its components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPricing {
    /// Issuance currency.
    pub currency: Currency,
    /// Government base rate in percent.
    pub base_rate: Decimal,
    /// Credit spread for the issuer's sector and rating.
    pub credit_spread_bps: BasisPoints,
    /// Size premium.
    pub size_adjustment_bps: BasisPoints,
    /// Market-condition adjustment (may be negative).
    pub market_adjustment_bps: BasisPoints,
    /// Cost of swapping into the base currency; zero when issuing in it.
    pub swap_cost_bps: BasisPoints,
    /// Total cost in percent, rounded to three decimal places.
    pub all_in_cost_percent: Decimal,
    /// Display strings for each component.
    pub breakdown: CostBreakdown,
}

/// Human-readable rendering of the cost components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// e.g. `"4.0%"`
    pub government_rate: String,
    /// e.g. `"+100 bps"`
    pub credit_spread: String,
    /// e.g. `"+10 bps"`
    pub size_premium: String,
    /// e.g. `"-10 bps"` or `"+0 bps"`
    pub market_adjustment: String,
    /// e.g. `"+80 bps"`, or `"0 bps"` without a swap
    pub swap_cost: String,
    /// e.g. `"5.10%"`
    pub total: String,
}

impl CurrencyPricing {
    /// Assembles a result from its components.
    ///
    /// The all-in cost is computed from the unrounded components; the stored
    /// figure is rounded to [`ALL_IN_COST_DP`] places, while the breakdown
    /// total shows the unrounded figure to two places.
    pub fn from_components(
        currency: Currency,
        base_rate: Decimal,
        credit_spread: BasisPoints,
        size_adjustment: BasisPoints,
        market_adjustment: BasisPoints,
        swap_cost: BasisPoints,
    ) -> Self {
        let spread_total = credit_spread + size_adjustment + market_adjustment;
        let base_cost = base_rate + spread_total.as_percentage();
        let all_in = base_cost + swap_cost.as_percentage();

        let breakdown = CostBreakdown {
            government_rate: format!("{:.1}%", base_rate.round_dp(1)),
            credit_spread: format!("+{} bps", credit_spread.value()),
            size_premium: format!("+{} bps", size_adjustment.value()),
            market_adjustment: market_adjustment.signed().to_string(),
            swap_cost: if swap_cost.is_positive() {
                format!("+{} bps", swap_cost.value())
            } else {
                "0 bps".to_string()
            },
            total: format!("{:.2}%", all_in.round_dp(2)),
        };

        Self {
            currency,
            base_rate,
            credit_spread_bps: credit_spread,
            size_adjustment_bps: size_adjustment,
            market_adjustment_bps: market_adjustment,
            swap_cost_bps: swap_cost,
            all_in_cost_percent: all_in.round_dp(ALL_IN_COST_DP),
            breakdown,
        }
    }

    /// Total spread over the government rate, excluding any swap.
    pub fn spread_total(&self) -> BasisPoints {
        self.credit_spread_bps + self.size_adjustment_bps + self.market_adjustment_bps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_same_currency_breakdown() {
        let pricing = CurrencyPricing::from_components(
            Currency::GBP,
            dec!(4.0),
            BasisPoints::new(100),
            BasisPoints::new(10),
            BasisPoints::ZERO,
            BasisPoints::ZERO,
        );
        assert_eq!(pricing.all_in_cost_percent, dec!(5.10));
        assert_eq!(pricing.spread_total(), BasisPoints::new(110));
        assert_eq!(pricing.breakdown.government_rate, "4.0%");
        assert_eq!(pricing.breakdown.credit_spread, "+100 bps");
        assert_eq!(pricing.breakdown.size_premium, "+10 bps");
        assert_eq!(pricing.breakdown.market_adjustment, "+0 bps");
        assert_eq!(pricing.breakdown.swap_cost, "0 bps");
        assert_eq!(pricing.breakdown.total, "5.10%");
    }

    #[test]
    fn test_swapped_breakdown() {
        let pricing = CurrencyPricing::from_components(
            Currency::EUR,
            dec!(2.5),
            BasisPoints::new(105),
            BasisPoints::new(10),
            BasisPoints::new(-10),
            BasisPoints::new(80),
        );
        assert_eq!(pricing.all_in_cost_percent, dec!(4.35));
        assert_eq!(pricing.breakdown.government_rate, "2.5%");
        assert_eq!(pricing.breakdown.market_adjustment, "-10 bps");
        assert_eq!(pricing.breakdown.swap_cost, "+80 bps");
        assert_eq!(pricing.breakdown.total, "4.35%");
    }

    #[test]
    fn test_serialized_field_names() {
        let pricing = CurrencyPricing::from_components(
            Currency::USD,
            dec!(4.5),
            BasisPoints::new(95),
            BasisPoints::new(10),
            BasisPoints::ZERO,
            BasisPoints::new(30),
        );
        let value = serde_json::to_value(&pricing).unwrap();
        assert_eq!(value["currency"], "USD");
        assert_eq!(value["base_rate"], 4.5);
        assert_eq!(value["credit_spread_bps"], 95);
        assert_eq!(value["swap_cost_bps"], 30);
        assert_eq!(value["all_in_cost_percent"], 5.85);
        assert_eq!(value["breakdown"]["total"], "5.85%");
    }
}

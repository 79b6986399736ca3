//! Desk guidance attached to a pricing analysis.

use serde::{Deserialize, Serialize};

use syndicate_core::types::{Currency, MarketCondition};

/// Deals at or above this size (millions) get a split suggestion.
pub const SPLIT_THRESHOLD_MILLION: u32 = 750;

/// Currency choice, timing advice and alternatives for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Currency with the lowest all-in cost.
    pub optimal_currency: Currency,
    /// One-line reason for the currency choice.
    pub rationale: String,
    /// Advice on the execution window.
    pub market_timing: String,
    /// Other ways to reduce cost, possibly empty.
    pub alternative_strategies: Vec<String>,
}

impl Recommendations {
    /// Builds the guidance for an already-chosen optimal currency.
    pub fn new(
        optimal_currency: Currency,
        market_condition: MarketCondition,
        deal_size_million: u32,
    ) -> Self {
        Self {
            optimal_currency,
            rationale: format!("Issue in {optimal_currency} for lowest all-in cost"),
            market_timing: market_timing_advice(market_condition).to_string(),
            alternative_strategies: alternative_strategies(market_condition, deal_size_million),
        }
    }
}

/// Timing advice for a market backdrop.
pub fn market_timing_advice(condition: MarketCondition) -> &'static str {
    match condition {
        MarketCondition::QuietWeek => {
            "Excellent timing - light issuance calendar provides 10 bps benefit"
        }
        MarketCondition::BusyWeek => {
            "Consider delaying - heavy issuance calendar adding 15 bps premium"
        }
        MarketCondition::CentralBankMeeting => {
            "High uncertainty - consider waiting until after central bank decision"
        }
        MarketCondition::Normal => "Neutral market conditions - proceed when ready",
    }
}

/// Alternative execution strategies, in a fixed order.
pub fn alternative_strategies(condition: MarketCondition, deal_size_million: u32) -> Vec<String> {
    let mut strategies = Vec::new();

    if condition == MarketCondition::CentralBankMeeting {
        strategies.push(
            "Consider waiting until after central bank meeting to avoid 20 bps uncertainty premium"
                .to_string(),
        );
    }

    if deal_size_million >= SPLIT_THRESHOLD_MILLION {
        strategies.push(format!(
            "Consider splitting into 2x £{}m deals to improve liquidity and reduce size premium",
            deal_size_million / 2
        ));
    }

    strategies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rationale_names_currency() {
        let rec = Recommendations::new(Currency::EUR, MarketCondition::Normal, 500);
        assert_eq!(rec.rationale, "Issue in EUR for lowest all-in cost");
        assert_eq!(
            rec.market_timing,
            "Neutral market conditions - proceed when ready"
        );
        assert!(rec.alternative_strategies.is_empty());
    }

    #[test]
    fn test_timing_advice_per_condition() {
        assert!(market_timing_advice(MarketCondition::QuietWeek).starts_with("Excellent timing"));
        assert!(market_timing_advice(MarketCondition::BusyWeek).starts_with("Consider delaying"));
        assert!(
            market_timing_advice(MarketCondition::CentralBankMeeting)
                .starts_with("High uncertainty")
        );
    }

    #[test]
    fn test_split_suggestion_at_threshold() {
        assert!(alternative_strategies(MarketCondition::Normal, 749).is_empty());

        let strategies = alternative_strategies(MarketCondition::Normal, 750);
        assert_eq!(
            strategies,
            vec![
                "Consider splitting into 2x £375m deals to improve liquidity and reduce size premium"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_split_uses_integer_halving() {
        let strategies = alternative_strategies(MarketCondition::Normal, 1001);
        assert!(strategies[0].contains("2x £500m deals"));
    }

    #[test]
    fn test_both_strategies_in_order() {
        let strategies = alternative_strategies(MarketCondition::CentralBankMeeting, 1000);
        assert_eq!(strategies.len(), 2);
        assert!(strategies[0].starts_with("Consider waiting until after central bank meeting"));
        assert!(strategies[1].starts_with("Consider splitting into 2x £500m"));
    }
}

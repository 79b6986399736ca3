//! Full pricing analysis returned for a request.

use serde::{Deserialize, Serialize};

use syndicate_core::types::Currency;

use crate::impact::FinancialImpact;
use crate::pricing::CurrencyPricing;
use crate::recommendations::Recommendations;

/// Everything the desk reports back for one issuance request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingAnalysis {
    /// Issuer name from the request.
    pub company_name: String,
    /// Pricing in the request's base currency.
    pub direct_pricing: CurrencyPricing,
    /// Pricing for every currency, in GBP, EUR, USD order.
    pub currency_comparison: Vec<CurrencyPricing>,
    /// Currency choice and desk guidance.
    pub recommendations: Recommendations,
    /// Cost projections and savings.
    pub financial_impact: FinancialImpact,
}

impl PricingAnalysis {
    /// Returns the comparison entry for a currency.
    pub fn pricing_for(&self, currency: Currency) -> Option<&CurrencyPricing> {
        self.currency_comparison
            .iter()
            .find(|p| p.currency == currency)
    }

    /// The currency recommended for issuance.
    pub fn optimal_currency(&self) -> Currency {
        self.recommendations.optimal_currency
    }
}

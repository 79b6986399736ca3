//! The pricing calculator.

use std::sync::Arc;

use syndicate_core::types::Currency;
use syndicate_core::{BasisPoints, SyndicateResult};

use crate::analysis::PricingAnalysis;
use crate::impact::{cheapest, FinancialImpact};
use crate::pricing::CurrencyPricing;
use crate::recommendations::Recommendations;
use crate::reference_data::ReferenceData;
use crate::request::{BondRequest, PricingTerms};

/// Prices issuance requests against a fixed set of reference tables.
///
/// The calculator holds no mutable state; clones share the same tables and
/// every operation is a pure function of its inputs.
///
/// # Example
///
/// ```rust
/// use syndicate_core::prelude::*;
/// use syndicate_pricing::{BondRequest, PricingCalculator};
///
/// let calculator = PricingCalculator::standard();
/// let request = BondRequest::new(
///     "ABC Corporation",
///     Sector::Utility,
///     CreditRating::AA,
///     500,
///     MarketCondition::Normal,
/// );
///
/// let analysis = calculator.analyze(&request).unwrap();
/// assert_eq!(analysis.optimal_currency(), Currency::EUR);
/// ```
#[derive(Debug, Clone)]
pub struct PricingCalculator {
    reference: Arc<ReferenceData>,
}

impl PricingCalculator {
    /// Creates a calculator over the given tables.
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    /// Creates a calculator over the built-in desk tables.
    pub fn standard() -> Self {
        Self::new(ReferenceData::standard())
    }

    /// The tables this calculator prices against.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// All-in cost of issuing in `currency`, expressed in the base currency
    /// of `terms`.
    pub fn all_in_cost(&self, currency: Currency, terms: &PricingTerms) -> CurrencyPricing {
        let data = &self.reference;

        let swap_cost = if currency == terms.base_currency {
            BasisPoints::ZERO
        } else {
            data.swap_cost(currency, terms.base_currency)
        };

        CurrencyPricing::from_components(
            currency,
            data.government_rate(currency),
            data.credit_spread(terms.sector, terms.rating, currency),
            data.size_adjustment(terms.deal_size_million),
            data.market_adjustment(terms.market_condition),
            swap_cost,
        )
    }

    /// Prices every currency, in GBP, EUR, USD order.
    pub fn compare_currencies(&self, terms: &PricingTerms) -> Vec<CurrencyPricing> {
        Currency::ALL
            .iter()
            .map(|&currency| self.all_in_cost(currency, terms))
            .collect()
    }

    /// Cost projections for a set of priced currencies.
    ///
    /// The first entry is treated as the base case.
    pub fn financial_impact(
        &self,
        deal_size_million: u32,
        pricings: &[CurrencyPricing],
    ) -> FinancialImpact {
        FinancialImpact::project(deal_size_million, pricings)
    }

    /// Desk guidance for a request given its priced currencies.
    pub fn recommendations(
        &self,
        pricings: &[CurrencyPricing],
        request: &BondRequest,
    ) -> Recommendations {
        let optimal = cheapest(pricings).map_or(request.base_currency, |p| p.currency);
        Recommendations::new(optimal, request.market_condition, request.deal_size_million)
    }

    /// Runs the full analysis for a request.
    pub fn analyze(&self, request: &BondRequest) -> SyndicateResult<PricingAnalysis> {
        request.validate()?;

        let terms = request.terms();
        let currency_comparison = self.compare_currencies(&terms);
        let direct_pricing = self.all_in_cost(terms.base_currency, &terms);
        let financial_impact = self.financial_impact(terms.deal_size_million, &currency_comparison);
        let recommendations = self.recommendations(&currency_comparison, request);

        log::debug!(
            "priced {} ({} {} {}m {}): optimal {}",
            request.company_name,
            request.sector,
            request.rating,
            request.deal_size_million,
            request.market_condition,
            recommendations.optimal_currency,
        );

        Ok(PricingAnalysis {
            company_name: request.company_name.clone(),
            direct_pricing,
            currency_comparison,
            recommendations,
            financial_impact,
        })
    }
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self::standard()
    }
}

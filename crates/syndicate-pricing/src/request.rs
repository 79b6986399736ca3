//! Issuance request submitted for pricing.

use serde::{Deserialize, Serialize};

use syndicate_core::types::{CreditRating, Currency, MarketCondition, Sector};
use syndicate_core::{SyndicateError, SyndicateResult};

/// A borrower's request for indicative pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondRequest {
    /// Issuer name, echoed back in the analysis.
    pub company_name: String,
    /// Issuer sector.
    pub sector: Sector,
    /// Issuer rating.
    pub rating: CreditRating,
    /// Deal size in millions.
    pub deal_size_million: u32,
    /// Currency the issuer would like to print in. Informational only.
    pub preferred_currency: Currency,
    /// Market backdrop for the execution window.
    pub market_condition: MarketCondition,
    /// Currency the issuer wants costs expressed in.
    #[serde(default)]
    pub base_currency: Currency,
}

impl BondRequest {
    /// Creates a request with the preferred and base currency set to GBP.
    pub fn new(
        company_name: impl Into<String>,
        sector: Sector,
        rating: CreditRating,
        deal_size_million: u32,
        market_condition: MarketCondition,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            sector,
            rating,
            deal_size_million,
            preferred_currency: Currency::GBP,
            market_condition,
            base_currency: Currency::GBP,
        }
    }

    /// Sets the base currency.
    #[must_use]
    pub fn with_base_currency(mut self, currency: Currency) -> Self {
        self.base_currency = currency;
        self
    }

    /// Sets the preferred currency.
    #[must_use]
    pub fn with_preferred_currency(mut self, currency: Currency) -> Self {
        self.preferred_currency = currency;
        self
    }

    /// Checks the fields the type system cannot.
    pub fn validate(&self) -> SyndicateResult<()> {
        if self.deal_size_million == 0 {
            return Err(SyndicateError::InvalidDealSize {
                value: 0,
                reason: "deal size must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// The pricing terms shared by every currency leg of this request.
    pub fn terms(&self) -> PricingTerms {
        PricingTerms {
            sector: self.sector,
            rating: self.rating,
            deal_size_million: self.deal_size_million,
            market_condition: self.market_condition,
            base_currency: self.base_currency,
        }
    }
}

/// Inputs to a single-currency cost calculation, apart from the currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PricingTerms {
    /// Issuer sector.
    pub sector: Sector,
    /// Issuer rating.
    pub rating: CreditRating,
    /// Deal size in millions.
    pub deal_size_million: u32,
    /// Market backdrop.
    pub market_condition: MarketCondition,
    /// Currency costs are expressed in.
    pub base_currency: Currency,
}

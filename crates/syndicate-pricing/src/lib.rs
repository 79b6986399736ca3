//! # Syndicate Pricing
//!
//! Indicative all-in cost pricing for corporate bond issuance.
//!
//! This crate provides:
//!
//! - **Reference data**: Government rates, credit spreads, size premiums,
//!   market adjustments and cross-currency swap costs
//! - **Calculator**: Per-currency all-in cost with a component breakdown
//! - **Financial impact**: Annual and ten-year cost projections with savings
//!   against the base case
//! - **Recommendations**: Optimal currency, timing advice and alternative
//!   execution strategies
//!
//! ## Example
//!
//! ```rust
//! use syndicate_pricing::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let calculator = PricingCalculator::standard();
//! let request = BondRequest::new(
//!     "ABC Corporation",
//!     Sector::Utility,
//!     CreditRating::AA,
//!     500,
//!     MarketCondition::Normal,
//! );
//!
//! let analysis = calculator.analyze(&request).unwrap();
//! assert_eq!(analysis.direct_pricing.all_in_cost_percent, dec!(5.10));
//! assert_eq!(analysis.recommendations.optimal_currency, Currency::EUR);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::unused_self)]

pub mod analysis;
pub mod calculator;
pub mod impact;
pub mod pricing;
pub mod recommendations;
pub mod reference_data;
pub mod request;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::PricingAnalysis;
    pub use crate::calculator::PricingCalculator;
    pub use crate::impact::{CostProjection, FinancialImpact, SavingsRecommendation};
    pub use crate::pricing::{CostBreakdown, CurrencyPricing};
    pub use crate::recommendations::Recommendations;
    pub use crate::reference_data::{ReferenceData, SizeBreakpoint};
    pub use crate::request::{BondRequest, PricingTerms};
    pub use syndicate_core::prelude::*;
}

pub use analysis::PricingAnalysis;
pub use calculator::PricingCalculator;
pub use impact::{CostProjection, FinancialImpact, SavingsRecommendation};
pub use pricing::{CostBreakdown, CurrencyPricing};
pub use recommendations::Recommendations;
pub use reference_data::ReferenceData;
pub use request::{BondRequest, PricingTerms};

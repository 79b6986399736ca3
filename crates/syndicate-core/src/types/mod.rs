//! Domain types for issuance pricing.
//!
//! - [`Currency`]: issuance currencies, plus [`CurrencyMap`] for per-currency tables
//! - [`Sector`]: issuer sector
//! - [`CreditRating`]: issuer rating bucket
//! - [`MarketCondition`]: execution-window backdrop
//! - [`BasisPoints`]: whole basis point quantities

mod basis_points;
mod currency;
mod market_condition;
mod rating;
mod sector;

pub use basis_points::{BasisPoints, Signed};
pub use currency::{Currency, CurrencyMap};
pub use market_condition::MarketCondition;
pub use rating::CreditRating;
pub use sector::Sector;

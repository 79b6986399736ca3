//! # Syndicate Core
//!
//! Core domain types for the Syndicate bond issuance pricing service.
//!
//! Every categorical input to pricing is a closed enum, so invalid sectors,
//! ratings, currencies or market conditions are rejected when a request is
//! parsed and never reach the calculator.
//!
//! ## Example
//!
//! ```rust
//! use syndicate_core::prelude::*;
//!
//! let sector: Sector = "utility".parse().unwrap();
//! let rating: CreditRating = "AA".parse().unwrap();
//! assert_eq!(sector, Sector::Utility);
//! assert_eq!(rating, CreditRating::AA);
//! assert!("retail".parse::<Sector>().is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{SyndicateError, SyndicateResult};
    pub use crate::types::{
        BasisPoints, CreditRating, Currency, CurrencyMap, MarketCondition, Sector,
    };
}

// Re-export commonly used types at crate root
pub use error::{SyndicateError, SyndicateResult};
pub use types::{BasisPoints, CreditRating, Currency, CurrencyMap, MarketCondition, Sector};

//! CLI command implementations.

pub mod options;
pub mod price;
pub mod rates;
pub mod spreads;

// Re-export argument types for the top-level parser
pub use price::PriceArgs;
pub use spreads::SpreadsArgs;

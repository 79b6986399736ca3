//! Credit rating buckets priced by the desk.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SyndicateError;

/// Issuer credit rating (S&P-style notation).
///
/// Only the investment-grade letter buckets have spread rows. The ordering is
/// from highest quality (AAA) to lowest (BBB).
///
/// # Examples
///
/// ```
/// use syndicate_core::types::CreditRating;
///
/// let rating = CreditRating::parse("Aa2").unwrap(); // Moody's notation
/// assert_eq!(rating, CreditRating::AA);
/// assert!(CreditRating::AAA < CreditRating::BBB);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreditRating {
    /// Highest quality
    AAA = 1,
    /// Very high quality
    AA = 2,
    /// Upper medium grade
    A = 3,
    /// Lowest investment grade bucket
    BBB = 4,
}

impl CreditRating {
    /// All ratings from highest to lowest quality.
    pub const ALL: [CreditRating; 4] = [
        CreditRating::AAA,
        CreditRating::AA,
        CreditRating::A,
        CreditRating::BBB,
    ];

    /// Returns the numeric score (1 = AAA, 4 = BBB).
    #[must_use]
    pub fn score(&self) -> u8 {
        *self as u8
    }

    /// Returns the S&P-style notation.
    #[must_use]
    pub fn sp_notation(&self) -> &'static str {
        match self {
            Self::AAA => "AAA",
            Self::AA => "AA",
            Self::A => "A",
            Self::BBB => "BBB",
        }
    }

    /// Returns the Moody's-style notation of the bucket's middle notch.
    #[must_use]
    pub fn moodys_notation(&self) -> &'static str {
        match self {
            Self::AAA => "Aaa",
            Self::AA => "Aa2",
            Self::A => "A2",
            Self::BBB => "Baa2",
        }
    }

    /// Parses a rating from S&P or Moody's notation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AAA" | "Aaa" => return Some(Self::AAA),
            "AA" | "Aa2" => return Some(Self::AA),
            "A" | "A2" => return Some(Self::A),
            "BBB" | "Baa2" => return Some(Self::BBB),
            _ => {}
        }

        match s.to_uppercase().as_str() {
            "AAA" => Some(Self::AAA),
            "AA" => Some(Self::AA),
            "A" => Some(Self::A),
            "BBB" => Some(Self::BBB),
            _ => None,
        }
    }
}

impl std::fmt::Display for CreditRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sp_notation())
    }
}

impl FromStr for CreditRating {
    type Err = SyndicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            SyndicateError::invalid_enum("rating", s, Self::ALL.iter().map(Self::sp_notation))
        })
    }
}

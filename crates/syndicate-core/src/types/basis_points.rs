//! Whole basis point quantities.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A spread or adjustment in whole basis points (1 bp = 0.01%).
///
/// Serializes as a bare integer.
///
/// # Example
///
/// ```rust
/// use syndicate_core::types::BasisPoints;
/// use rust_decimal_macros::dec;
///
/// let spread = BasisPoints::new(125);
/// assert_eq!(spread.as_percentage(), dec!(1.25));
/// assert_eq!(spread.to_string(), "125 bps");
/// assert_eq!(BasisPoints::new(-10).signed().to_string(), "-10 bps");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(i32);

impl BasisPoints {
    /// Zero basis points.
    pub const ZERO: BasisPoints = BasisPoints(0);

    /// Creates a value from whole basis points.
    #[must_use]
    pub const fn new(bps: i32) -> Self {
        Self(bps)
    }

    /// Returns the raw basis point count.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Returns the value in percent (125 bps = 1.25).
    #[must_use]
    pub fn as_percentage(&self) -> Decimal {
        Decimal::from(self.0) / Decimal::ONE_HUNDRED
    }

    /// Returns true if the value is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns a view that always prints a sign (`+0 bps`, `-10 bps`).
    #[must_use]
    pub fn signed(self) -> Signed {
        Signed(self)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps", self.0)
    }
}

/// Display adapter returned by [`BasisPoints::signed`].
#[derive(Debug, Clone, Copy)]
pub struct Signed(BasisPoints);

impl fmt::Display for Signed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+} bps", self.0 .0)
    }
}

impl From<i32> for BasisPoints {
    fn from(bps: i32) -> Self {
        Self(bps)
    }
}

impl Add for BasisPoints {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

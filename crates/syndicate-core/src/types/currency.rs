//! Issuance currencies and a fixed-key per-currency table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::SyndicateError;

/// ISO 4217 codes of the currencies a deal can be issued in.
///
/// Declaration order is the evaluation order used throughout pricing
/// (GBP, EUR, USD), so the derived `Ord` matches it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Currency {
    /// British Pound Sterling
    #[default]
    GBP,
    /// Euro
    EUR,
    /// United States Dollar
    USD,
}

impl Currency {
    /// All supported currencies in evaluation order.
    pub const ALL: [Currency; 3] = [Currency::GBP, Currency::EUR, Currency::USD];

    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
            Currency::USD => "USD",
        }
    }

    /// Returns the full currency name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Currency::GBP => "British Pound Sterling",
            Currency::EUR => "Euro",
            Currency::USD => "United States Dollar",
        }
    }

    /// Parses a currency from a string code (case-insensitive).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "GBP" => Some(Currency::GBP),
            "EUR" => Some(Currency::EUR),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = SyndicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| {
            SyndicateError::invalid_enum("currency", s, Self::ALL.iter().map(Currency::code))
        })
    }
}

/// A value for every supported currency.
///
/// Lookups can never miss: the map has one field per [`Currency`] variant, and
/// serializes as `{"GBP": .., "EUR": .., "USD": ..}`.
///
/// # Example
///
/// ```rust
/// use syndicate_core::types::{Currency, CurrencyMap};
///
/// let rates = CurrencyMap::new(4.0, 2.5, 4.5);
/// assert_eq!(rates[Currency::EUR], 2.5);
/// assert_eq!(rates.iter().count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CurrencyMap<T> {
    /// Value for GBP.
    #[serde(rename = "GBP")]
    pub gbp: T,
    /// Value for EUR.
    #[serde(rename = "EUR")]
    pub eur: T,
    /// Value for USD.
    #[serde(rename = "USD")]
    pub usd: T,
}

impl<T> CurrencyMap<T> {
    /// Creates a map from one value per currency.
    pub fn new(gbp: T, eur: T, usd: T) -> Self {
        Self { gbp, eur, usd }
    }

    /// Builds a map by evaluating `f` for each currency in evaluation order.
    pub fn from_fn(mut f: impl FnMut(Currency) -> T) -> Self {
        Self {
            gbp: f(Currency::GBP),
            eur: f(Currency::EUR),
            usd: f(Currency::USD),
        }
    }

    /// Builds a map from a fallible function, stopping at the first error.
    pub fn try_from_fn<E>(mut f: impl FnMut(Currency) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            gbp: f(Currency::GBP)?,
            eur: f(Currency::EUR)?,
            usd: f(Currency::USD)?,
        })
    }

    /// Returns the value for a currency.
    pub fn get(&self, currency: Currency) -> &T {
        match currency {
            Currency::GBP => &self.gbp,
            Currency::EUR => &self.eur,
            Currency::USD => &self.usd,
        }
    }

    /// Iterates over `(currency, value)` pairs in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, &T)> {
        Currency::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Transforms every value, keeping the currency keys.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> CurrencyMap<U> {
        CurrencyMap {
            gbp: f(&self.gbp),
            eur: f(&self.eur),
            usd: f(&self.usd),
        }
    }
}

impl<T> Index<Currency> for CurrencyMap<T> {
    type Output = T;

    fn index(&self, currency: Currency) -> &T {
        self.get(currency)
    }
}

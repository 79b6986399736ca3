//! Error types for the Syndicate pricing service.
//!
//! Pricing itself cannot fail once its inputs are valid, so every variant here
//! describes either a rejected input value or a malformed reference table.

use thiserror::Error;

/// A specialized Result type for Syndicate operations.
pub type SyndicateResult<T> = Result<T, SyndicateError>;

/// The main error type for Syndicate operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyndicateError {
    /// A value outside the allowed set for an enumerated field.
    #[error("Invalid {kind}: '{value}' (expected one of: {expected})")]
    InvalidEnum {
        /// Which enumeration was being parsed (sector, rating, ...).
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Comma-separated list of accepted values.
        expected: String,
    },

    /// Deal size that cannot be priced.
    #[error("Invalid deal size: {value}m - {reason}")]
    InvalidDealSize {
        /// The rejected deal size in millions.
        value: u64,
        /// Reason for invalidity.
        reason: String,
    },

    /// A reference table is missing a required entry.
    #[error("Missing {table} entry for {key}")]
    MissingTableEntry {
        /// Name of the table.
        table: &'static str,
        /// Key that has no value.
        key: String,
    },

    /// A reference table could not be interpreted.
    #[error("Invalid reference table: {reason}")]
    InvalidTable {
        /// Description of the problem.
        reason: String,
    },

    /// A reference data file could not be read.
    #[error("Failed to read {path}: {reason}")]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying error message.
        reason: String,
    },
}

impl SyndicateError {
    /// Creates an invalid enum error listing the accepted values.
    #[must_use]
    pub fn invalid_enum<'a>(
        kind: &'static str,
        value: impl Into<String>,
        expected: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::InvalidEnum {
            kind,
            value: value.into(),
            expected: expected.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    /// Creates a missing table entry error.
    #[must_use]
    pub fn missing_entry(table: &'static str, key: impl Into<String>) -> Self {
        Self::MissingTableEntry {
            table,
            key: key.into(),
        }
    }

    /// Creates an invalid table error.
    #[must_use]
    pub fn invalid_table(reason: impl Into<String>) -> Self {
        Self::InvalidTable {
            reason: reason.into(),
        }
    }

    /// Returns true if the error was caused by caller input rather than
    /// server-side reference data.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidEnum { .. } | Self::InvalidDealSize { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_enum_display() {
        let err = SyndicateError::invalid_enum("sector", "retail", ["utility", "bank"]);
        assert_eq!(
            err.to_string(),
            "Invalid sector: 'retail' (expected one of: utility, bank)"
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn test_missing_entry_is_server_side() {
        let err = SyndicateError::missing_entry("credit_spreads", "utility/AA/GBP");
        assert!(err.to_string().contains("utility/AA/GBP"));
        assert!(!err.is_client_error());
    }
}

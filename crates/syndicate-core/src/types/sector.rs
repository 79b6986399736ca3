//! Issuer sector classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SyndicateError;

/// Issuer sector used to select a credit spread row.
///
/// # Examples
///
/// ```
/// use syndicate_core::types::Sector;
///
/// let sector: Sector = "bank".parse().unwrap();
/// assert_eq!(sector, Sector::Bank);
/// assert_eq!(sector.name(), "Bank");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    /// Regulated utility issuers
    Utility,
    /// Banks and other financial institutions
    Bank,
    /// Non-financial corporates
    Industrial,
}

impl Sector {
    /// All sectors in table order.
    pub const ALL: [Sector; 3] = [Sector::Utility, Sector::Bank, Sector::Industrial];

    /// Returns the wire value (`"utility"`, `"bank"`, `"industrial"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utility => "utility",
            Self::Bank => "bank",
            Self::Industrial => "industrial",
        }
    }

    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utility => "Utility",
            Self::Bank => "Bank",
            Self::Industrial => "Industrial",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sector {
    type Err = SyndicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utility" => Ok(Self::Utility),
            "bank" => Ok(Self::Bank),
            "industrial" => Ok(Self::Industrial),
            _ => Err(SyndicateError::invalid_enum(
                "sector",
                s,
                Self::ALL.iter().map(Sector::as_str),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_round_trip_names() {
        for sector in Sector::ALL {
            assert_eq!(sector.as_str().parse::<Sector>().unwrap(), sector);
        }
    }

    #[test]
    fn test_sector_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Sector::Industrial).unwrap(),
            "\"industrial\""
        );
        assert!(serde_json::from_str::<Sector>("\"retail\"").is_err());
    }

    #[test]
    fn test_unknown_sector() {
        let err = "sovereign".parse::<Sector>().unwrap_err();
        assert!(matches!(err, SyndicateError::InvalidEnum { kind: "sector", .. }));
    }
}

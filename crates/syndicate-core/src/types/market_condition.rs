//! Prevailing primary-market conditions for the issuance window.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SyndicateError;

/// Market backdrop during the planned execution week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketCondition {
    /// Light issuance calendar
    QuietWeek,
    /// Heavy issuance calendar
    BusyWeek,
    /// Central bank rate decision during the window
    CentralBankMeeting,
    /// No notable calendar effects
    Normal,
}

impl MarketCondition {
    /// All market conditions in table order.
    pub const ALL: [MarketCondition; 4] = [
        MarketCondition::QuietWeek,
        MarketCondition::BusyWeek,
        MarketCondition::CentralBankMeeting,
        MarketCondition::Normal,
    ];

    /// Returns the wire value, e.g. `"central_bank_meeting"`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuietWeek => "quiet_week",
            Self::BusyWeek => "busy_week",
            Self::CentralBankMeeting => "central_bank_meeting",
            Self::Normal => "normal",
        }
    }

    /// Returns a display label: underscores become spaces and each word is
    /// title-cased (`"central_bank_meeting"` -> `"Central Bank Meeting"`).
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for MarketCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketCondition {
    type Err = SyndicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                SyndicateError::invalid_enum(
                    "market condition",
                    s,
                    Self::ALL.iter().map(MarketCondition::as_str),
                )
            })
    }
}

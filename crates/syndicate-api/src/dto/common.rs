//! Common DTO types.

use serde::{Deserialize, Serialize};
use syndicate_core::MarketCondition;

/// Service banner returned from `/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    pub version: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub reference_data: String,
}

/// A selectable market condition with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConditionOption {
    pub value: String,
    pub label: String,
}

impl From<MarketCondition> for MarketConditionOption {
    fn from(condition: MarketCondition) -> Self {
        Self {
            value: condition.as_str().to_string(),
            label: condition.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_condition_option() {
        let option = MarketConditionOption::from(MarketCondition::CentralBankMeeting);
        assert_eq!(option.value, "central_bank_meeting");
        assert_eq!(option.label, "Central Bank Meeting");
    }
}

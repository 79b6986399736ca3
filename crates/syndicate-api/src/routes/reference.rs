//! Enumeration endpoints for populating request forms.

use axum::Json;
use syndicate_core::{CreditRating, Currency, MarketCondition, Sector};

use crate::dto::MarketConditionOption;

/// Supported issuer sectors.
pub async fn sectors() -> Json<Vec<&'static str>> {
    Json(Sector::ALL.iter().map(Sector::as_str).collect())
}

/// Supported credit ratings.
pub async fn ratings() -> Json<Vec<&'static str>> {
    Json(CreditRating::ALL.iter().map(CreditRating::sp_notation).collect())
}

/// Supported issuance currencies.
pub async fn currencies() -> Json<Vec<&'static str>> {
    Json(Currency::ALL.iter().map(Currency::code).collect())
}

/// Supported market conditions with display labels.
pub async fn market_conditions() -> Json<Vec<MarketConditionOption>> {
    Json(
        MarketCondition::ALL
            .into_iter()
            .map(MarketConditionOption::from)
            .collect(),
    )
}

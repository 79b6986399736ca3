//! Pricing endpoints.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use syndicate_pricing::{BondRequest, PricingAnalysis};

use crate::error::ApiResult;
use crate::state::AppState;

/// Full pricing analysis for an issuance request.
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<BondRequest>, JsonRejection>,
) -> ApiResult<Json<PricingAnalysis>> {
    let Json(request) = payload?;

    tracing::debug!(
        company = %request.company_name,
        sector = %request.sector,
        rating = %request.rating,
        deal_size_million = request.deal_size_million,
        "pricing request"
    );

    let analysis = state.calculator.analyze(&request)?;
    Ok(Json(analysis))
}

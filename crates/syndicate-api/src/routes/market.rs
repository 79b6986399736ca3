//! Market data endpoints.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use rust_decimal::Decimal;
use syndicate_core::{BasisPoints, CreditRating, CurrencyMap, Sector};

use crate::error::ApiResult;
use crate::state::AppState;

/// Government base rates per currency, in percent.
pub async fn rates(State(state): State<AppState>) -> Json<CurrencyMap<Decimal>> {
    Json(*state.calculator.reference().government_rates())
}

/// Credit spreads per currency for a sector and rating.
///
/// Path segments use the same wire names as the pricing request body.
pub async fn spreads(
    State(state): State<AppState>,
    path: Result<Path<(Sector, CreditRating)>, PathRejection>,
) -> ApiResult<Json<CurrencyMap<BasisPoints>>> {
    let Path((sector, rating)) = path?;
    Ok(Json(*state.calculator.reference().spreads_for(sector, rating)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::server::create_router;
    use crate::state::AppState;

    fn create_test_server() -> TestServer {
        TestServer::new(create_router(AppState::standard())).unwrap()
    }

    #[tokio::test]
    async fn test_rates() {
        let server = create_test_server();

        let response = server.get("/api/market/rates").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["GBP"], 4.0);
        assert_eq!(body["EUR"], 2.5);
        assert_eq!(body["USD"], 4.5);
    }

    #[tokio::test]
    async fn test_spreads() {
        let server = create_test_server();

        let response = server.get("/api/market/spreads/utility/AA").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["GBP"], 100);
        assert_eq!(body["EUR"], 105);
        assert_eq!(body["USD"], 95);
    }

    #[tokio::test]
    async fn test_spreads_unknown_sector() {
        let server = create_test_server();

        let response = server
            .get("/api/market/spreads/retail/AA")
            .expect_failure()
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_spreads_unknown_rating() {
        let server = create_test_server();

        let response = server
            .get("/api/market/spreads/bank/CCC")
            .expect_failure()
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_spreads_path_matches_body_wire_names() {
        let server = create_test_server();

        for path in [
            "/api/market/spreads/Utility/AA",
            "/api/market/spreads/utility/aa",
            "/api/market/spreads/utility/Aa2",
        ] {
            let response = server.get(path).expect_failure().await;
            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        }
    }
}

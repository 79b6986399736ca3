//! Service banner and health check endpoints.

use axum::{extract::State, Json};

use crate::dto::{HealthResponse, MessageResponse};
use crate::state::AppState;

/// Service banner.
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "DCM Syndicate Pricing API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        reference_data: state.reference_source.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;

    use crate::dto::{HealthResponse, MessageResponse};
    use crate::server::create_router;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_root_banner() {
        let server = TestServer::new(create_router(AppState::standard())).unwrap();

        let response = server.get("/").await;
        response.assert_status_ok();

        let body: MessageResponse = response.json();
        assert_eq!(body.message, "DCM Syndicate Pricing API");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health() {
        let server = TestServer::new(create_router(AppState::standard())).unwrap();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.reference_data, "built-in");
    }
}

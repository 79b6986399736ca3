//! Server configuration and startup.

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Create the API router with the default CORS policy.
pub fn create_router(state: AppState) -> Router {
    // The default origin list is a valid header value.
    let cors = ServerConfig::default()
        .cors_layer()
        .unwrap_or_else(|_| CorsLayer::new());
    create_router_with_cors(state, cors)
}

/// Create the API router with an explicit CORS layer.
pub fn create_router_with_cors(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        .nest("/api", api_routes())
        .fallback(routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Routes under `/api`.
fn api_routes() -> Router<AppState> {
    Router::new()
        // Pricing
        .route("/pricing/calculate", post(routes::pricing::calculate))
        // Market data
        .route("/market/rates", get(routes::market::rates))
        .route(
            "/market/spreads/{sector}/{rating}",
            get(routes::market::spreads),
        )
        // Enumerations
        .route("/sectors", get(routes::reference::sectors))
        .route("/ratings", get(routes::reference::ratings))
        .route("/currencies", get(routes::reference::currencies))
        .route("/market-conditions", get(routes::reference::market_conditions))
}

/// Run the server.
pub async fn run_server(state: AppState, config: &ServerConfig) -> anyhow::Result<()> {
    let app = create_router_with_cors(state, config.cors_layer()?);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Syndicate API Server listening on http://{}", addr);
    tracing::info!("Allowed origins: {}", config.allowed_origins.join(", "));
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/pricing/calculate");
    tracing::info!("  GET  /api/market/rates");
    tracing::info!("  GET  /api/market/spreads/{{sector}}/{{rating}}");
    tracing::info!("  GET  /api/sectors | /api/ratings | /api/currencies | /api/market-conditions");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}

#[cfg(test)]
mod tests {
    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;

    use super::*;
    use crate::error::ErrorResponse;

    #[tokio::test]
    async fn test_unknown_route() {
        let server = TestServer::new(create_router(AppState::standard())).unwrap();
        let response = server.get("/api/bonds").expect_failure().await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: ErrorResponse = response.json();
        assert_eq!(body.error.code, "NOT_FOUND");
        assert!(body.error.message.contains("bonds"));
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let server = TestServer::new(create_router(AppState::standard())).unwrap();

        let response = server
            .get("/api/sectors")
            .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            HeaderValue::from_static("http://localhost:3000")
        );
        assert_eq!(
            response.header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            HeaderValue::from_static("true")
        );
    }

    #[tokio::test]
    async fn test_cors_ignores_other_origins() {
        let server = TestServer::new(create_router(AppState::standard())).unwrap();

        let response = server
            .get("/api/sectors")
            .add_header(
                header::ORIGIN,
                HeaderValue::from_static("https://elsewhere.example.com"),
            )
            .await;
        response.assert_status_ok();
        assert!(response
            .maybe_header(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}

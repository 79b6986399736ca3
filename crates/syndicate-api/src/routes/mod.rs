//! API route handlers.

pub mod health;
pub mod market;
pub mod pricing;
pub mod reference;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for paths no route matches.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

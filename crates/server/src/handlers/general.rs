//! # General Route Handlers
//!
//! The root, health check, selector catalog and prediction API status routes.

use super::{wrap_response, ApiResponse, AppError, AppState};
use crate::types::LangParams;
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;
use yieldcast::{
    catalog::{listing, CatalogListing},
    types::BackendHealth,
};

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "yieldcast server is running."
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Lists every selector option in the requested language.
pub async fn catalog_handler(
    Query(params): Query<LangParams>,
) -> Result<Json<ApiResponse<CatalogListing>>, AppError> {
    let locale = params.locale()?;
    Ok(wrap_response(listing(locale)))
}

/// Passes the prediction API's own health report through.
pub async fn status_handler(
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<BackendHealth>>, AppError> {
    info!(
        "[status] Checking prediction API at {}",
        app_state.backend.base_url()
    );
    let health = app_state.backend.health().await?;
    Ok(wrap_response(health))
}

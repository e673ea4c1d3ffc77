//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `yieldcast-server`.
//! `general` holds the service and catalog routes, `forecast` the selection
//! resolution routes, and `insights` the model history and backtest routes.

pub mod forecast;
pub mod general;
pub mod insights;

pub use forecast::*;
pub use general::*;
pub use insights::*;

// Shared items used by multiple handler modules.
use super::{errors::AppError, state::AppState, types::ApiResponse};
use axum::Json;

/// Wraps a successful result in the standard `ApiResponse` envelope.
pub(crate) fn wrap_response<T>(result: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse { result })
}

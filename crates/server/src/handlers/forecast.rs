//! # Forecast Route Handlers
//!
//! `/forecast` runs one full resolution cycle for the selection in the query
//! string. `/estimate` returns the local sample value without any network call.

use super::{wrap_response, ApiResponse, AppError, AppState};
use crate::types::{ForecastParams, ForecastResponse};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use yieldcast::{
    eligibility::is_eligible, estimator::estimate, forecast_once, projector::format_yield,
    PredictionResult, SelectionTuple, StatusLine,
};

/// Resolves a selection into a displayable forecast.
///
/// Upstream failures never surface as errors here: the response carries the
/// estimated value and a `fallback_reason` instead.
pub async fn forecast_handler(
    State(app_state): State<AppState>,
    Query(params): Query<ForecastParams>,
) -> Result<Json<ApiResponse<ForecastResponse>>, AppError> {
    let selection = params.selection()?;
    let locale = params.locale()?;
    info!("[forecast] Received request for {selection}");

    let forecast = forecast_once(&app_state.resolver, selection).await;
    let status_text = forecast.view.status().text(locale).to_string();

    Ok(wrap_response(ForecastResponse {
        selection: forecast.selection,
        eligible: forecast.eligible,
        view: forecast.view,
        status_text,
        fallback_reason: forecast.resolution.and_then(|r| r.failure),
    }))
}

#[derive(Serialize, Debug)]
pub struct EstimateResponse {
    pub selection: SelectionTuple,
    /// Whether the live model would have been asked for this selection.
    pub eligible: bool,
    pub result: PredictionResult,
    pub yield_text: String,
    pub status_text: String,
}

/// Computes the deterministic sample value for any selection.
pub async fn estimate_handler(
    Query(params): Query<ForecastParams>,
) -> Result<Json<ApiResponse<EstimateResponse>>, AppError> {
    let selection = params.selection()?;
    let locale = params.locale()?;

    let result = estimate(&selection);
    Ok(wrap_response(EstimateResponse {
        eligible: is_eligible(&selection),
        yield_text: format_yield(result.predicted_yield),
        status_text: StatusLine::SampleValue.text(locale).to_string(),
        selection,
        result,
    }))
}

//! # Model Insight Handlers
//!
//! Passthrough routes for the prediction API's history and explanation
//! endpoints, and the bundled walk-forward backtest report.

use super::{wrap_response, ApiResponse, AppError, AppState};
use crate::types::{LangParams, YearParams};
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;
use yieldcast::{
    backtest::{report, BacktestReport},
    types::{FeatureImportance, WeatherTrend, YearPrediction, YieldHistory},
};

/// Predicts a historical year from its observed weather.
pub async fn predict_year_handler(
    State(app_state): State<AppState>,
    Query(params): Query<YearParams>,
) -> Result<Json<ApiResponse<YearPrediction>>, AppError> {
    let year = params.year()?;
    info!("[insights] Predicting historical year {year}");
    let prediction = app_state.backend.predict_year(year).await?;
    Ok(wrap_response(prediction))
}

pub async fn feature_importance_handler(
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<FeatureImportance>>, AppError> {
    Ok(wrap_response(app_state.backend.feature_importance().await?))
}

pub async fn yield_history_handler(
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<YieldHistory>>, AppError> {
    Ok(wrap_response(app_state.backend.yield_history().await?))
}

pub async fn weather_trend_handler(
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<WeatherTrend>>, AppError> {
    Ok(wrap_response(app_state.backend.weather_trend().await?))
}

/// The walk-forward backtest, served without calling the prediction API.
pub async fn backtest_handler(
    Query(params): Query<LangParams>,
) -> Result<Json<ApiResponse<BacktestReport>>, AppError> {
    let locale = params.locale()?;
    Ok(wrap_response(report(locale)))
}

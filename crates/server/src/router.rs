use super::{handlers, state::AppState};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/catalog", get(handlers::catalog_handler))
        .route("/forecast", get(handlers::forecast_handler))
        .route("/estimate", get(handlers::estimate_handler))
        .route("/status", get(handlers::status_handler))
        .route("/predict-year", get(handlers::predict_year_handler))
        .route("/feature-importance", get(handlers::feature_importance_handler))
        .route("/yield-history", get(handlers::yield_history_handler))
        .route("/weather-trend", get(handlers::weather_trend_handler))
        .route("/backtest", get(handlers::backtest_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}

//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The state holds the configuration, the scenario
//! resolver used by the forecast routes, and a direct handle on the prediction
//! API for the status route.

use crate::config::AppConfig;
use std::sync::Arc;
use tracing::info;
use yieldcast::{providers::HttpPredictionProvider, ScenarioResolver};

/// The shared application state, accessible from all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml`.
    pub config: Arc<AppConfig>,
    /// Resolves selections with a bounded wait and local fallback.
    pub resolver: Arc<ScenarioResolver>,
    /// The prediction API client, used for passthrough routes.
    pub backend: Arc<HttpPredictionProvider>,
}

/// Builds the shared application state from the configuration.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let backend = HttpPredictionProvider::with_timeout(&config.api_url, config.timeout())?;
    let resolver = ScenarioResolver::new(Box::new(backend.clone()), config.timeout());
    info!(
        api_url = %backend.base_url(),
        timeout_secs = config.timeout_secs,
        "Initialized prediction API client."
    );

    Ok(AppState {
        config: Arc::new(config),
        resolver: Arc::new(resolver),
        backend: Arc::new(backend),
    })
}

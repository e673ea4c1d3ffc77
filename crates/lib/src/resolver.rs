//! # Scenario Resolver
//!
//! Turns an eligible selection into a prediction by asking the model backend,
//! falling back to the local estimator when the backend cannot answer.

use crate::{
    catalog::province_name,
    errors::{FailureKind, ForecastError},
    estimator::estimate,
    providers::{http::DEFAULT_TIMEOUT, HttpPredictionProvider, PredictionProvider},
    types::{PredictionResult, ScenarioQuery, SelectionTuple},
};
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

/// The outcome of one eligible resolution cycle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Resolution {
    pub result: PredictionResult,
    /// Why the live prediction was replaced by the estimate, if it was.
    pub failure: Option<FailureKind>,
}

/// Resolves selections against a prediction provider with a bounded wait.
#[derive(Clone, Debug)]
pub struct ScenarioResolver {
    provider: Box<dyn PredictionProvider>,
    timeout: Duration,
}

impl ScenarioResolver {
    pub fn new(provider: Box<dyn PredictionProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    pub fn builder() -> ScenarioResolverBuilder {
        ScenarioResolverBuilder::default()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the wire query for a selection.
    pub fn query_for(selection: &SelectionTuple) -> ScenarioQuery {
        ScenarioQuery {
            province: province_name(&selection.region),
            year: selection.year,
            scenario: selection.scenario_key(),
        }
    }

    /// Asks the provider for a live prediction.
    ///
    /// The caller must have checked eligibility. Exactly one request is made;
    /// there is no retry.
    pub async fn resolve(
        &self,
        selection: &SelectionTuple,
    ) -> Result<PredictionResult, ForecastError> {
        let query = Self::query_for(selection);
        let prediction = tokio::time::timeout(self.timeout, self.provider.predict_scenario(&query))
            .await
            .map_err(|_| ForecastError::Timeout(self.timeout))??;

        let predicted_yield = prediction.predicted_yield_ton_ha;
        if !predicted_yield.is_finite() {
            return Err(ForecastError::InvalidYield(predicted_yield));
        }

        Ok(PredictionResult {
            predicted_yield,
            confidence: query.scenario.confidence(),
            is_fallback: false,
        })
    }

    /// Resolves a selection, substituting the local estimate on any failure.
    pub async fn resolve_or_estimate(&self, selection: &SelectionTuple) -> Resolution {
        match self.resolve(selection).await {
            Ok(result) => {
                info!(
                    "[resolver] {selection} resolved to {:.2} t/ha",
                    result.predicted_yield
                );
                Resolution {
                    result,
                    failure: None,
                }
            }
            Err(e) => {
                let kind = e.kind();
                warn!("[resolver] Prediction for {selection} failed ({kind:?}): {e}. Using fallback estimate.");
                Resolution {
                    result: estimate(selection),
                    failure: Some(kind),
                }
            }
        }
    }
}

/// A builder for creating `ScenarioResolver` instances.
#[derive(Default)]
pub struct ScenarioResolverBuilder {
    provider: Option<Box<dyn PredictionProvider>>,
    api_url: Option<String>,
    timeout: Option<Duration>,
}

impl ScenarioResolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an existing provider. Takes precedence over `api_url`.
    pub fn provider(mut self, provider: Box<dyn PredictionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Uses an `HttpPredictionProvider` pointed at this base URL.
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Sets the upper bound on how long a resolution may wait for the backend.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the `ScenarioResolver`.
    ///
    /// Fails with `MissingProvider` if neither a provider nor an API URL was set.
    pub fn build(self) -> Result<ScenarioResolver, ForecastError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let provider = match (self.provider, self.api_url) {
            (Some(provider), _) => provider,
            (None, Some(url)) => Box::new(HttpPredictionProvider::with_timeout(url, timeout)?),
            (None, None) => return Err(ForecastError::MissingProvider),
        };
        Ok(ScenarioResolver::new(provider, timeout))
    }
}

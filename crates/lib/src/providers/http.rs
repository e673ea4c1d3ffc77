use crate::{
    errors::ForecastError,
    providers::PredictionProvider,
    types::{
        AvailableYears, BackendHealth, FeatureImportance, ScenarioPrediction, ScenarioQuery,
        WeatherTrend, YearPrediction, YieldHistory,
    },
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Requests that take longer than this are abandoned.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A provider for the yield-prediction HTTP API.
#[derive(Clone, Debug)]
pub struct HttpPredictionProvider {
    client: ReqwestClient,
    base_url: String,
}

impl HttpPredictionProvider {
    /// Creates a new `HttpPredictionProvider` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ForecastError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a new `HttpPredictionProvider` whose requests time out after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ForecastError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ForecastError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the backend health report from `GET /health`.
    pub async fn health(&self) -> Result<BackendHealth, ForecastError> {
        self.get_json("health", &[]).await
    }

    /// Fetches the years the backend has feature data for from `GET /years`.
    pub async fn available_years(&self) -> Result<AvailableYears, ForecastError> {
        self.get_json("years", &[]).await
    }

    /// Predicts a historical year from its observed weather via `GET /predict-year`.
    pub async fn predict_year(&self, year: i32) -> Result<YearPrediction, ForecastError> {
        info!("[http_provider] Requesting prediction for year {year}");
        self.get_json("predict-year", &[("year", year.to_string())]).await
    }

    /// Fetches the model's feature importance from `GET /feature-importance`.
    pub async fn feature_importance(&self) -> Result<FeatureImportance, ForecastError> {
        self.get_json("feature-importance", &[]).await
    }

    /// Fetches actual and predicted yields per year from `GET /yield-history`.
    pub async fn yield_history(&self) -> Result<YieldHistory, ForecastError> {
        self.get_json("yield-history", &[]).await
    }

    /// Fetches the key weather indicators per year from `GET /weather-trend`.
    pub async fn weather_trend(&self) -> Result<WeatherTrend, ForecastError> {
        self.get_json("weather-trend", &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ForecastError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("[http_provider] GET {url} {query:?}");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(ForecastError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(ForecastError::Request)?;
        if !status.is_success() {
            return Err(ForecastError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PredictionProvider for HttpPredictionProvider {
    /// Calls `GET /predict-scenario` with the province, year and scenario key.
    async fn predict_scenario(
        &self,
        query: &ScenarioQuery,
    ) -> Result<ScenarioPrediction, ForecastError> {
        info!(
            "[http_provider] Requesting scenario '{}' for {} {}",
            query.scenario, query.province, query.year
        );
        let params = [
            ("province", query.province.clone()),
            ("year", query.year.to_string()),
            ("scenario", query.scenario.as_str().to_string()),
        ];
        self.get_json("predict-scenario", &params).await
    }
}

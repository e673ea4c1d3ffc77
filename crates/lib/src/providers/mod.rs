pub mod http;

use crate::errors::ForecastError;
use crate::types::{ScenarioPrediction, ScenarioQuery};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

pub use http::HttpPredictionProvider;

/// A trait for fetching a scenario prediction from a model backend.
///
/// Implementations issue exactly one request per call and never retry. Any
/// failure is returned as a `ForecastError` and handled by the caller.
#[async_trait]
pub trait PredictionProvider: Send + Sync + Debug + DynClone {
    async fn predict_scenario(
        &self,
        query: &ScenarioQuery,
    ) -> Result<ScenarioPrediction, ForecastError>;
}

dyn_clone::clone_trait_object!(PredictionProvider);

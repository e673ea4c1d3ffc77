use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use yieldcast::errors::ForecastError;
use yieldcast::providers::PredictionProvider;
use yieldcast::types::{ScenarioKey, ScenarioPrediction, ScenarioQuery};

// --- Mock Prediction Provider ---

/// What the mock answers for one scenario.
#[derive(Clone, Debug)]
enum MockAnswer {
    Yield(f64),
    Fail { status: u16, body: String },
}

#[derive(Clone, Debug)]
struct MockEntry {
    answer: MockAnswer,
    delay: Duration,
}

/// A scriptable in-process `PredictionProvider`.
///
/// Answers are programmed per scenario key, each with an optional delay so
/// tests can control which of two concurrent requests finishes first.
#[derive(Clone, Debug)]
pub struct MockPredictionProvider {
    entries: Arc<Mutex<HashMap<ScenarioKey, MockEntry>>>,
    calls: Arc<Mutex<Vec<ScenarioQuery>>>,
}

impl MockPredictionProvider {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Pre-programs a successful yield for a scenario.
    pub fn add_yield(&self, scenario: ScenarioKey, value: f64, delay: Duration) {
        self.entries.lock().unwrap().insert(
            scenario,
            MockEntry {
                answer: MockAnswer::Yield(value),
                delay,
            },
        );
    }

    /// Pre-programs an HTTP-style failure for a scenario.
    pub fn add_failure(&self, scenario: ScenarioKey, status: u16, delay: Duration) {
        self.entries.lock().unwrap().insert(
            scenario,
            MockEntry {
                answer: MockAnswer::Fail {
                    status,
                    body: "mock failure".to_string(),
                },
                delay,
            },
        );
    }

    /// Retrieves the recorded queries for assertion.
    pub fn get_calls(&self) -> Vec<ScenarioQuery> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockPredictionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionProvider for MockPredictionProvider {
    async fn predict_scenario(
        &self,
        query: &ScenarioQuery,
    ) -> Result<ScenarioPrediction, ForecastError> {
        self.calls.lock().unwrap().push(query.clone());

        let entry = self.entries.lock().unwrap().get(&query.scenario).cloned();
        let Some(entry) = entry else {
            return Err(ForecastError::Status {
                status: 404,
                body: format!(
                    "MockPredictionProvider: No answer programmed for scenario '{}'",
                    query.scenario
                ),
            });
        };

        if !entry.delay.is_zero() {
            tokio::time::sleep(entry.delay).await;
        }

        match entry.answer {
            MockAnswer::Yield(value) => Ok(prediction(query, value)),
            MockAnswer::Fail { status, body } => Err(ForecastError::Status { status, body }),
        }
    }
}

/// Builds a response shaped like the real endpoint's.
pub fn prediction(query: &ScenarioQuery, value: f64) -> ScenarioPrediction {
    ScenarioPrediction {
        predicted_yield_ton_ha: value,
        crop: Some("Cà phê Robusta".to_string()),
        province: Some(query.province.clone()),
        year: Some(query.year),
        scenario: Some(query.scenario.as_str().to_string()),
        scenario_label: None,
        confidence_lower: Some(value * 0.92),
        confidence_upper: Some(value * 1.08),
        unit: Some("ton/ha".to_string()),
        confidence_note: None,
    }
}

//! # Core Types
//!
//! The values flowing through one resolution cycle: the user's selection, the
//! scenario key sent over the wire, and the prediction result shown to the user.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The crop selected when a page view starts.
pub const DEFAULT_CROP: &str = "coffee";
/// The region selected when a page view starts.
pub const DEFAULT_REGION: &str = "dak-lak";
/// The forecast year selected when a page view starts.
pub const DEFAULT_YEAR: i32 = 2026;
/// The UI scenario id selected when a page view starts.
pub const DEFAULT_SCENARIO: &str = "baseline";

/// The four selector values the user controls.
///
/// A selection is always fully populated and replaced wholesale on every
/// change. `scenario` carries the UI-facing scenario id, which is what the
/// fallback hash is computed over; use [`SelectionTuple::scenario_key`] for the
/// API-facing key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionTuple {
    pub crop: String,
    pub region: String,
    pub year: i32,
    pub scenario: String,
}

impl SelectionTuple {
    pub fn new(
        crop: impl Into<String>,
        region: impl Into<String>,
        year: i32,
        scenario: impl Into<String>,
    ) -> Self {
        Self {
            crop: crop.into(),
            region: region.into(),
            year,
            scenario: scenario.into(),
        }
    }

    /// Returns a copy of this selection with a different scenario.
    pub fn with_scenario(&self, scenario: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            ..self.clone()
        }
    }

    /// The API scenario key for the selected UI scenario.
    pub fn scenario_key(&self) -> ScenarioKey {
        ScenarioKey::from_ui_id(&self.scenario)
    }
}

impl Default for SelectionTuple {
    fn default() -> Self {
        Self::new(DEFAULT_CROP, DEFAULT_REGION, DEFAULT_YEAR, DEFAULT_SCENARIO)
    }
}

impl fmt::Display for SelectionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.crop, self.region, self.year, self.scenario
        )
    }
}

/// The weather scenarios understood by the prediction endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKey {
    Normal,
    Favorable,
    ElNino,
    LaNina,
    SevereDrought,
    MajorStorm,
}

impl ScenarioKey {
    pub const ALL: [ScenarioKey; 6] = [
        ScenarioKey::Normal,
        ScenarioKey::Favorable,
        ScenarioKey::ElNino,
        ScenarioKey::LaNina,
        ScenarioKey::SevereDrought,
        ScenarioKey::MajorStorm,
    ];

    /// Maps a UI scenario id onto its API key. Unknown ids map to `Normal`.
    pub fn from_ui_id(id: &str) -> Self {
        match UiScenario::from_id(id) {
            Some(ui) => ui.key(),
            None => ScenarioKey::Normal,
        }
    }

    /// The wire name used in the `scenario` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioKey::Normal => "normal",
            ScenarioKey::Favorable => "favorable",
            ScenarioKey::ElNino => "el_nino",
            ScenarioKey::LaNina => "la_nina",
            ScenarioKey::SevereDrought => "severe_drought",
            ScenarioKey::MajorStorm => "major_storm",
        }
    }

    /// Extreme scenarios are predicted with less confidence.
    pub fn confidence(&self) -> ConfidenceLabel {
        match self {
            ScenarioKey::SevereDrought | ScenarioKey::MajorStorm => ConfidenceLabel::Moderate,
            _ => ConfidenceLabel::High,
        }
    }

    /// The factor applied to the hashed base yield by the fallback estimator.
    pub fn fallback_multiplier(&self) -> f64 {
        match self {
            ScenarioKey::Normal => 1.0,
            ScenarioKey::Favorable => 1.15,
            ScenarioKey::ElNino => 0.85,
            ScenarioKey::LaNina => 0.92,
            ScenarioKey::SevereDrought => 0.65,
            ScenarioKey::MajorStorm => 0.75,
        }
    }
}

impl fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scenario choices offered by the selector, identified by their UI ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum UiScenario {
    Baseline,
    Favorable,
    ElNino,
    LaNina,
    Drought,
    Storm,
}

impl UiScenario {
    pub const ALL: [UiScenario; 6] = [
        UiScenario::Baseline,
        UiScenario::Favorable,
        UiScenario::ElNino,
        UiScenario::LaNina,
        UiScenario::Drought,
        UiScenario::Storm,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "baseline" => Some(UiScenario::Baseline),
            "favorable" => Some(UiScenario::Favorable),
            "el-nino" => Some(UiScenario::ElNino),
            "la-nina" => Some(UiScenario::LaNina),
            "drought" => Some(UiScenario::Drought),
            "storm" => Some(UiScenario::Storm),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            UiScenario::Baseline => "baseline",
            UiScenario::Favorable => "favorable",
            UiScenario::ElNino => "el-nino",
            UiScenario::LaNina => "la-nina",
            UiScenario::Drought => "drought",
            UiScenario::Storm => "storm",
        }
    }

    pub fn key(&self) -> ScenarioKey {
        match self {
            UiScenario::Baseline => ScenarioKey::Normal,
            UiScenario::Favorable => ScenarioKey::Favorable,
            UiScenario::ElNino => ScenarioKey::ElNino,
            UiScenario::LaNina => ScenarioKey::LaNina,
            UiScenario::Drought => ScenarioKey::SevereDrought,
            UiScenario::Storm => ScenarioKey::MajorStorm,
        }
    }
}

/// A coarse, two-level reliability indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLabel {
    High,
    Moderate,
}

/// The number shown for one resolution cycle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Tons per hectare.
    pub predicted_yield: f64,
    pub confidence: ConfidenceLabel,
    /// `true` when the value came from the local estimator.
    pub is_fallback: bool,
}

/// The query sent to the scenario-prediction endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScenarioQuery {
    pub province: String,
    pub year: i32,
    pub scenario: ScenarioKey,
}

/// A response from the `GET /predict-scenario` endpoint.
///
/// Only the yield is interpreted; everything else is descriptive.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScenarioPrediction {
    pub predicted_yield_ton_ha: f64,
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub scenario: Option<String>,
    #[serde(default)]
    pub scenario_label: Option<String>,
    #[serde(default)]
    pub confidence_lower: Option<f64>,
    #[serde(default)]
    pub confidence_upper: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub confidence_note: Option<String>,
}

/// A response from the backend `GET /health` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BackendHealth {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub features_loaded: bool,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub feature_count: Option<u32>,
    #[serde(default)]
    pub data_years_range: Option<String>,
}

/// A response from the backend `GET /years` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AvailableYears {
    pub available_years: Vec<i32>,
    #[serde(default)]
    pub years_with_yield_data: Vec<i32>,
    pub min_year: i32,
    pub max_year: i32,
}

/// A response from the backend `GET /predict-year` endpoint: the model's
/// answer for a historical year's observed weather.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct YearPrediction {
    pub year: i32,
    pub predicted_yield: f64,
    pub confidence_lower: f64,
    pub confidence_upper: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Feature values the model was given, by column name.
    #[serde(default)]
    pub features_used: Option<BTreeMap<String, f64>>,
}

fn default_unit() -> String {
    "ton/ha".to_string()
}

/// A response from the backend `GET /feature-importance` endpoint.
///
/// The three lists are parallel; `shap_mean_abs` is absent when the backend
/// has no SHAP values loaded.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FeatureImportance {
    pub features: Vec<String>,
    pub importance_scores: Vec<f64>,
    #[serde(default)]
    pub shap_mean_abs: Option<Vec<f64>>,
}

impl FeatureImportance {
    /// Feature names paired with their scores, most important first.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .features
            .iter()
            .map(String::as_str)
            .zip(self.importance_scores.iter().copied())
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// A response from the backend `GET /yield-history` endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct YieldHistory {
    pub years: Vec<i32>,
    /// `None` for years without a recorded harvest.
    pub actual_yields: Vec<Option<f64>>,
    pub predicted_yields: Vec<f64>,
}

/// One year of [`YieldHistory`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct YieldHistoryRow {
    pub year: i32,
    pub actual: Option<f64>,
    pub predicted: f64,
}

impl YieldHistory {
    /// Zips the parallel lists into rows, stopping at the shortest one.
    pub fn rows(&self) -> Vec<YieldHistoryRow> {
        self.years
            .iter()
            .zip(&self.actual_yields)
            .zip(&self.predicted_yields)
            .map(|((&year, &actual), &predicted)| YieldHistoryRow {
                year,
                actual,
                predicted,
            })
            .collect()
    }
}

/// A response from the backend `GET /weather-trend` endpoint: the key
/// weather indicators per year.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct WeatherTrend {
    pub years: Vec<i32>,
    /// Flowering-season rainfall, February to March (mm).
    #[serde(rename = "rain_Feb_Mar")]
    pub rain_feb_mar: Vec<f64>,
    /// Mean daily maximum temperature, May to June (°C).
    #[serde(rename = "temp_max_MayJun")]
    pub temp_max_may_jun: Vec<f64>,
    /// Days above 33 °C in May and June.
    pub days_over_33: Vec<f64>,
    /// Standardized precipitation index, March to June.
    #[serde(rename = "SPI_MarJun")]
    pub spi_mar_jun: Vec<f64>,
}

/// The display language of the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Vi,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vi" => Ok(Locale::Vi),
            "en" => Ok(Locale::En),
            other => Err(format!("Unsupported language '{other}'. Use 'vi' or 'en'.")),
        }
    }
}

//! # Scenario Yield Forecasting
//!
//! This crate resolves a crop/province/year/weather-scenario selection into a
//! displayable yield prediction. Selections the live model supports are sent to
//! the prediction API; when that call fails, a deterministic sample value is
//! shown instead, clearly marked as such.

pub mod backtest;
pub mod catalog;
pub mod eligibility;
pub mod errors;
pub mod estimator;
pub mod projector;
pub mod providers;
pub mod resolver;
pub mod session;
pub mod types;

pub use errors::{FailureKind, ForecastError};
pub use projector::{project, StatusLine, ViewModel};
pub use resolver::{Resolution, ScenarioResolver, ScenarioResolverBuilder};
pub use session::{ForecastSession, Phase, Snapshot};
pub use types::{
    ConfidenceLabel, Locale, PredictionResult, ScenarioKey, SelectionTuple, UiScenario,
};

use serde::Serialize;
use tracing::info;

/// The result of resolving a single selection outside of a session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Forecast {
    pub selection: SelectionTuple,
    pub eligible: bool,
    /// `None` for ineligible selections.
    pub resolution: Option<Resolution>,
    pub view: ViewModel,
}

/// Runs one complete resolution cycle for `selection`.
///
/// Ineligible selections never touch the network. Eligible ones always end
/// with a value, live or estimated.
pub async fn forecast_once(resolver: &ScenarioResolver, selection: SelectionTuple) -> Forecast {
    let eligible = eligibility::is_eligible(&selection);
    if !eligible {
        info!("[forecast] {selection} is not supported yet.");
        let view = project(&selection, false, None, false);
        return Forecast {
            selection,
            eligible,
            resolution: None,
            view,
        };
    }

    let resolution = resolver.resolve_or_estimate(&selection).await;
    let view = project(&selection, true, Some(&resolution.result), false);
    Forecast {
        selection,
        eligible,
        resolution: Some(resolution),
        view,
    }
}

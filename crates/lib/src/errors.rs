use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Custom error types for the forecast flow.
#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to prediction API: {0}")]
    Request(reqwest::Error),
    #[error("Prediction API did not answer within {0:?}")]
    Timeout(Duration),
    #[error("Prediction API returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to deserialize prediction API response: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("Prediction API returned a non-finite yield: {0}")]
    InvalidYield(f64),
    #[error("Prediction provider is missing")]
    MissingProvider,
}

/// The coarse reason a resolution fell back to the local estimate.
///
/// The presentation layer treats every kind the same way. The distinction only
/// exists for logs and monitoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Timeout,
    Transport,
    Status,
    Malformed,
}

impl ForecastError {
    /// Classifies the error for diagnostics.
    pub fn kind(&self) -> FailureKind {
        match self {
            ForecastError::Timeout(_) => FailureKind::Timeout,
            ForecastError::Request(e) if e.is_timeout() => FailureKind::Timeout,
            ForecastError::Request(_)
            | ForecastError::ReqwestClientBuild(_)
            | ForecastError::MissingProvider => FailureKind::Transport,
            ForecastError::Status { .. } => FailureKind::Status,
            ForecastError::Deserialization(_) | ForecastError::InvalidYield(_) => {
                FailureKind::Malformed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_classification() {
        assert_eq!(
            ForecastError::Timeout(Duration::from_secs(10)).kind(),
            FailureKind::Timeout
        );
        assert_eq!(
            ForecastError::Status {
                status: 503,
                body: "Model not loaded".to_string()
            }
            .kind(),
            FailureKind::Status
        );
        assert_eq!(
            ForecastError::InvalidYield(f64::NAN).kind(),
            FailureKind::Malformed
        );
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            ForecastError::from(parse_err).kind(),
            FailureKind::Malformed
        );
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};
use yieldcast::ForecastError;

/// A custom error type for the server application.
///
/// Forecast routes never produce an upstream error: a failed prediction falls
/// back to the local estimate. `Upstream` is only used by routes that proxy
/// the prediction API directly.
#[derive(Debug)]
pub enum AppError {
    /// The request's query parameters could not be used.
    BadRequest(String),
    /// The prediction API could not be reached or answered badly.
    Upstream(ForecastError),
}

impl From<ForecastError> for AppError {
    fn from(err: ForecastError) -> Self {
        AppError::Upstream(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::BadRequest(msg) => {
                warn!("Bad request: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Upstream(err) => {
                error!("ForecastError: {:?}", err);
                match err {
                    ForecastError::ReqwestClientBuild(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Failed to build HTTP client: {e}"),
                    ),
                    ForecastError::MissingProvider => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Server is not configured correctly.".to_string(),
                    ),
                    ForecastError::Timeout(after) => (
                        StatusCode::GATEWAY_TIMEOUT,
                        format!("Prediction API did not answer within {after:?}"),
                    ),
                    other => (
                        StatusCode::BAD_GATEWAY,
                        format!("Prediction API unavailable: {other}"),
                    ),
                }
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            status_of(AppError::BadRequest("Invalid year 'soon'.".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ForecastError::Timeout(Duration::from_secs(10)).into()),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            status_of(
                ForecastError::Status {
                    status: 503,
                    body: "Model not loaded".into(),
                }
                .into()
            ),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(ForecastError::MissingProvider.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

//! # Model Insight Endpoint Tests
//!
//! The history passthrough routes against a mocked prediction API, and the
//! bundled backtest report.

mod common;

use anyhow::Result;
use common::TestApp;
use httpmock::Method;
use serde_json::json;

#[tokio::test]
async fn test_predict_year_passes_through() -> Result<()> {
    // --- 1. Arrange ---
    let app = TestApp::spawn().await?;
    let year_mock = app.mock_server.mock(|when, then| {
        when.method(Method::GET)
            .path("/predict-year")
            .query_param("year", "2024");
        then.status(200).json_body(json!({
            "year": 2024,
            "predicted_yield": 2.51,
            "confidence_lower": 2.259,
            "confidence_upper": 2.761,
            "unit": "ton/ha"
        }));
    });

    // --- 2. Act ---
    let (status, body) = app.get_json("/predict-year?year=2024").await?;

    // --- 3. Assert ---
    year_mock.assert();
    assert_eq!(status, 200);
    assert_eq!(body["result"]["predicted_yield"], 2.51);
    assert_eq!(body["result"]["unit"], "ton/ha");
    Ok(())
}

#[tokio::test]
async fn test_predict_year_validates_query() -> Result<()> {
    let app = TestApp::spawn().await?;
    let year_mock = app.mock_server.mock(|when, then| {
        when.method(Method::GET).path("/predict-year");
        then.status(200).json_body(json!({}));
    });

    let (missing, body) = app.get_json("/predict-year").await?;
    assert_eq!(missing, 400);
    assert_eq!(body["error"], "Missing 'year'.");

    let (invalid, body) = app.get_json("/predict-year?year=last").await?;
    assert_eq!(invalid, 400);
    assert_eq!(body["error"], "Invalid year 'last'.");

    year_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_predict_year_upstream_error_is_bad_gateway() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_server.mock(|when, then| {
        when.method(Method::GET).path("/predict-year");
        then.status(404)
            .json_body(json!({ "detail": "No data available for year 1989." }));
    });

    let (status, body) = app.get_json("/predict-year?year=1989").await?;

    assert_eq!(status, 502);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Prediction API unavailable"));
    Ok(())
}

#[tokio::test]
async fn test_history_routes_pass_through() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_server.mock(|when, then| {
        when.method(Method::GET).path("/feature-importance");
        then.status(200).json_body(json!({
            "features": ["radiation_JunSep", "rain_Feb_Mar"],
            "importance_scores": [0.47, 0.03]
        }));
    });
    app.mock_server.mock(|when, then| {
        when.method(Method::GET).path("/yield-history");
        then.status(200).json_body(json!({
            "years": [2024, 2025],
            "actual_yields": [2.52, null],
            "predicted_yields": [2.51, 2.58]
        }));
    });
    app.mock_server.mock(|when, then| {
        when.method(Method::GET).path("/weather-trend");
        then.status(200).json_body(json!({
            "years": [2024],
            "rain_Feb_Mar": [41.5],
            "temp_max_MayJun": [33.8],
            "days_over_33": [17.0],
            "SPI_MarJun": [-1.2]
        }));
    });

    let (status, importance) = app.get_json("/feature-importance").await?;
    assert_eq!(status, 200);
    assert_eq!(importance["result"]["features"][0], "radiation_JunSep");
    assert!(importance["result"]["shap_mean_abs"].is_null());

    let (status, history) = app.get_json("/yield-history").await?;
    assert_eq!(status, 200);
    assert_eq!(history["result"]["actual_yields"], json!([2.52, null]));

    let (status, trend) = app.get_json("/weather-trend").await?;
    assert_eq!(status, 200);
    // Field names match the prediction API's own.
    assert_eq!(trend["result"]["SPI_MarJun"], json!([-1.2]));
    Ok(())
}

#[tokio::test]
async fn test_backtest_is_served_without_backend() -> Result<()> {
    let app = TestApp::spawn().await?;
    let any_mock = app.mock_server.mock(|when, then| {
        when.path_contains("/");
        then.status(500);
    });

    let (status, body) = app.get_json("/backtest?lang=en").await?;

    any_mock.assert_hits(0);
    assert_eq!(status, 200);
    let result = &body["result"];
    assert_eq!(result["years"].as_array().unwrap().len(), 7);
    assert_eq!(result["years"][0]["year"], 2018);
    assert_eq!(result["years"][0]["grade"], "poor");
    assert_eq!(result["summary"]["best_year"], 2024);
    assert_eq!(result["factors"][0]["name"], "Solar radiation (Jun-Sep)");
    Ok(())
}

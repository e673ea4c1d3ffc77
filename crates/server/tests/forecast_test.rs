//! # Forecast Endpoint Tests
//!
//! `/forecast` and `/estimate` against a mocked prediction API: live values,
//! every fallback path, and selections the live model does not cover.

mod common;

use anyhow::Result;
use common::TestApp;
use httpmock::Method;
use serde_json::json;
use std::time::Duration;
use yieldcast::{estimator::estimate, projector::format_yield, SelectionTuple};

#[tokio::test]
async fn test_forecast_returns_live_prediction() -> Result<()> {
    // --- 1. Arrange ---
    let app = TestApp::spawn().await?;
    let predict_mock = app.mock_server.mock(|when, then| {
        when.method(Method::GET)
            .path("/predict-scenario")
            .query_param("province", "Đắk Lắk")
            .query_param("year", "2026")
            .query_param("scenario", "severe_drought");
        then.status(200).json_body(json!({
            "crop": "Cà phê Robusta",
            "province": "Đắk Lắk",
            "year": 2026,
            "scenario": "severe_drought",
            "predicted_yield_ton_ha": 2.4,
            "unit": "ton/ha"
        }));
    });

    // --- 2. Act ---
    let (status, body) = app
        .get_json("/forecast?crop=coffee&region=dak-lak&year=2026&scenario=drought&lang=en")
        .await?;

    // --- 3. Assert ---
    predict_mock.assert();
    assert_eq!(status, 200);
    let result = &body["result"];
    assert_eq!(result["eligible"], true);
    assert_eq!(result["view"]["state"], "ready");
    assert_eq!(result["view"]["yield_text"], "2.40");
    assert_eq!(result["view"]["status"], "moderate_accuracy");
    assert_eq!(result["status_text"], "Moderate accuracy");
    assert!(result.get("fallback_reason").is_none());
    Ok(())
}

#[tokio::test]
async fn test_forecast_defaults_missing_fields() -> Result<()> {
    let app = TestApp::spawn().await?;
    let predict_mock = app.mock_server.mock(|when, then| {
        when.method(Method::GET)
            .path("/predict-scenario")
            .query_param("year", "2026")
            .query_param("scenario", "normal");
        then.status(200)
            .json_body(json!({ "predicted_yield_ton_ha": 2.8 }));
    });

    let (status, body) = app.get_json("/forecast").await?;

    predict_mock.assert();
    assert_eq!(status, 200);
    assert_eq!(
        body["result"]["selection"],
        json!({"crop": "coffee", "region": "dak-lak", "year": 2026, "scenario": "baseline"})
    );
    assert_eq!(body["result"]["view"]["yield_text"], "2.80");
    assert_eq!(body["result"]["status_text"], "Độ chính xác cao");
    Ok(())
}

#[tokio::test]
async fn test_forecast_falls_back_on_backend_error() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_server.mock(|when, then| {
        when.method(Method::GET).path("/predict-scenario");
        then.status(500)
            .json_body(json!({ "detail": "Prediction failed" }));
    });

    let (status, body) = app
        .get_json("/forecast?scenario=drought&lang=en")
        .await?;

    let expected = estimate(&SelectionTuple::default().with_scenario("drought"));
    assert_eq!(status, 200);
    assert_eq!(body["result"]["fallback_reason"], "status");
    assert_eq!(body["result"]["view"]["status"], "sample_value");
    assert_eq!(
        body["result"]["view"]["yield_text"],
        format_yield(expected.predicted_yield)
    );
    assert_eq!(
        body["result"]["status_text"],
        "API unavailable, showing sample value"
    );
    Ok(())
}

#[tokio::test]
async fn test_forecast_falls_back_on_slow_backend() -> Result<()> {
    let app = TestApp::spawn_with_timeout(1).await?;
    app.mock_server.mock(|when, then| {
        when.method(Method::GET).path("/predict-scenario");
        then.status(200)
            .delay(Duration::from_secs(4))
            .json_body(json!({ "predicted_yield_ton_ha": 2.9 }));
    });

    let started = std::time::Instant::now();
    let (status, body) = app.get_json("/forecast").await?;

    assert!(started.elapsed() < Duration::from_secs(3));
    assert_eq!(status, 200);
    assert_eq!(body["result"]["fallback_reason"], "timeout");
    assert_eq!(body["result"]["view"]["status"], "sample_value");
    Ok(())
}

#[tokio::test]
async fn test_forecast_falls_back_on_malformed_body() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_server.mock(|when, then| {
        when.method(Method::GET).path("/predict-scenario");
        then.status(200).body("not json at all");
    });

    let (status, body) = app.get_json("/forecast?scenario=storm").await?;

    assert_eq!(status, 200);
    assert_eq!(body["result"]["fallback_reason"], "malformed");
    Ok(())
}

#[tokio::test]
async fn test_forecast_for_unsupported_selection_is_coming_soon() -> Result<()> {
    let app = TestApp::spawn().await?;
    let predict_mock = app.mock_server.mock(|when, then| {
        when.method(Method::GET).path("/predict-scenario");
        then.status(200)
            .json_body(json!({ "predicted_yield_ton_ha": 2.8 }));
    });

    let (status, body) = app
        .get_json("/forecast?crop=rice&region=an-giang&year=2026&lang=en")
        .await?;

    predict_mock.assert_hits(0);
    assert_eq!(status, 200);
    assert_eq!(body["result"]["eligible"], false);
    assert_eq!(body["result"]["view"]["state"], "coming_soon");
    assert_eq!(body["result"]["view"]["crop"], "rice");
    assert_eq!(body["result"]["status_text"], "Coming soon");
    Ok(())
}

#[tokio::test]
async fn test_forecast_rejects_non_numeric_year() -> Result<()> {
    let app = TestApp::spawn().await?;

    let (status, body) = app.get_json("/forecast?year=next").await?;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid year 'next'.");
    Ok(())
}

#[tokio::test]
async fn test_estimate_never_calls_backend() -> Result<()> {
    let app = TestApp::spawn().await?;
    let predict_mock = app.mock_server.mock(|when, then| {
        when.method(Method::GET).path("/predict-scenario");
        then.status(200)
            .json_body(json!({ "predicted_yield_ton_ha": 9.9 }));
    });

    let (status, body) = app
        .get_json("/estimate?crop=pepper&region=gia-lai&year=2029&scenario=favorable")
        .await?;

    let expected = estimate(&SelectionTuple::new("pepper", "gia-lai", 2029, "favorable"));
    predict_mock.assert_hits(0);
    assert_eq!(status, 200);
    assert_eq!(body["result"]["eligible"], false);
    assert_eq!(body["result"]["result"]["is_fallback"], true);
    assert_eq!(
        body["result"]["result"]["predicted_yield"].as_f64(),
        Some(expected.predicted_yield)
    );
    assert_eq!(
        body["result"]["yield_text"],
        format_yield(expected.predicted_yield)
    );
    Ok(())
}

//! # CLI Command Tests
//!
//! Runs the `yieldcast` binary for the commands that work without a reachable
//! prediction API, plus the fallback path when the API is down.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

/// Builds a command running in a scratch directory so the log file lands there.
fn yieldcast(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("yieldcast").unwrap();
    cmd.current_dir(dir.path()).env_remove("YIELDCAST_API_URL");
    cmd
}

#[test]
fn test_estimate_command_prints_sample_value() {
    let dir = tempdir().unwrap();

    yieldcast(&dir)
        .args(["estimate", "--scenario", "drought", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee · Dak Lak · 2026 · Severe Drought"))
        .stdout(predicate::str::contains(
            "API unavailable, showing sample value",
        ));

    assert!(dir.path().join("yieldcast-cli.log").exists());
}

#[test]
fn test_estimate_json_is_marked_as_fallback() {
    let dir = tempdir().unwrap();

    let output = yieldcast(&dir)
        .args(["estimate", "--crop", "rice", "--region", "an-giang", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["is_fallback"], true);
    let predicted = value["predicted_yield"].as_f64().unwrap();
    assert!((2.0..3.0).contains(&predicted));
}

#[test]
fn test_catalog_command_lists_options() {
    let dir = tempdir().unwrap();

    yieldcast(&dir)
        .args(["catalog", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("coffee"))
        .stdout(predicate::str::contains("[Mekong Delta]"))
        .stdout(predicate::str::contains("Years: 2026, 2027, 2028, 2029, 2030"));
}

#[test]
fn test_forecast_falls_back_when_api_is_unreachable() {
    let dir = tempdir().unwrap();

    yieldcast(&dir)
        .args([
            "forecast",
            "--api-url",
            "http://127.0.0.1:9",
            "--timeout-secs",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("tấn/ha"))
        .stdout(predicate::str::contains(
            "Không thể kết nối API, hiển thị giá trị mẫu",
        ));
}

#[test]
fn test_forecast_for_unsupported_crop_is_coming_soon() {
    let dir = tempdir().unwrap();

    yieldcast(&dir)
        .args([
            "forecast",
            "--crop",
            "tea",
            "--api-url",
            "http://127.0.0.1:9",
            "--lang",
            "en",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coming soon"));
}

#[test]
fn test_status_fails_when_api_is_unreachable() {
    let dir = tempdir().unwrap();

    yieldcast(&dir)
        .args(["status", "--api-url", "http://127.0.0.1:9", "--timeout-secs", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is unavailable"));
}

#[test]
fn test_unknown_language_is_rejected() {
    let dir = tempdir().unwrap();

    yieldcast(&dir)
        .args(["catalog", "--lang", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported language"));
}

#[test]
fn test_interactive_session_prints_latest_selection() {
    let dir = tempdir().unwrap();

    yieldcast(&dir)
        .args([
            "interactive",
            "--api-url",
            "http://127.0.0.1:9",
            "--timeout-secs",
            "2",
            "--lang",
            "en",
        ])
        .write_stdin("crop tea\nscenario storm\ncrop coffee\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Coffee · Dak Lak · 2026 · Major Storm"))
        .stdout(predicate::str::contains(
            "API unavailable, showing sample value",
        ));
}

#[test]
fn test_backtest_command_works_offline() {
    let dir = tempdir().unwrap();

    yieldcast(&dir)
        .args(["backtest", "--lang", "en", "--api-url", "http://127.0.0.1:9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2022    2.62       2.44"))
        .stdout(predicate::str::contains("Mean error 5.75% over 7 years"));
}

#[test]
fn test_history_commands_fail_when_api_is_unreachable() {
    let dir = tempdir().unwrap();

    yieldcast(&dir)
        .args([
            "predict-year",
            "--year",
            "2024",
            "--api-url",
            "http://127.0.0.1:9",
            "--timeout-secs",
            "2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not predict year 2024"));

    yieldcast(&dir)
        .args(["weather", "--api-url", "http://127.0.0.1:9", "--timeout-secs", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not fetch the weather trend"));
}

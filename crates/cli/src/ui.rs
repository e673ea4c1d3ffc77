//! # Text Rendering
//!
//! Turns forecasts, session snapshots and catalog listings into the plain text
//! the CLI prints. Nothing here performs I/O.

use yieldcast::{
    backtest::BacktestReport,
    catalog::{find_crop, find_region, CatalogListing},
    projector::format_yield,
    types::{
        AvailableYears, BackendHealth, FeatureImportance, WeatherTrend, YearPrediction,
        YieldHistory,
    },
    Forecast, Locale, Phase, SelectionTuple, Snapshot, UiScenario, ViewModel,
};

fn unit(locale: Locale) -> &'static str {
    match locale {
        Locale::Vi => "tấn/ha",
        Locale::En => "t/ha",
    }
}

/// A human-readable label for a selection, falling back to raw ids for
/// values the catalog does not know.
pub fn selection_label(selection: &SelectionTuple, locale: Locale) -> String {
    let crop = find_crop(&selection.crop)
        .map(|c| c.name(locale))
        .unwrap_or(selection.crop.as_str());
    let region = find_region(&selection.region)
        .map(|r| r.name(locale))
        .unwrap_or(selection.region.as_str());
    let scenario = UiScenario::from_id(&selection.scenario)
        .map(|s| s.name(locale))
        .unwrap_or(selection.scenario.as_str());
    format!("{crop} · {region} · {} · {scenario}", selection.year)
}

/// Renders the value line and status line of a view.
pub fn render_view(view: &ViewModel, locale: Locale) -> String {
    let status = view.status().text(locale);
    match view {
        ViewModel::Idle => format!("  -- {}\n  {status}", unit(locale)),
        ViewModel::ComingSoon { .. } => format!("  {status}"),
        ViewModel::Computing { previous: Some(value) } => {
            format!("  ({} {}) {status}", value.yield_text, unit(locale))
        }
        ViewModel::Computing { previous: None } => format!("  {status}"),
        ViewModel::Ready(value) => {
            format!("  {} {}\n  {status}", value.yield_text, unit(locale))
        }
    }
}

pub fn render_forecast(forecast: &Forecast, locale: Locale) -> String {
    format!(
        "{}\n{}",
        selection_label(&forecast.selection, locale),
        render_view(&forecast.view, locale)
    )
}

/// Renders one session update. Superseded snapshots are never published, so
/// every snapshot describes the current selection.
pub fn render_snapshot(snapshot: &Snapshot, locale: Locale) -> String {
    let marker = match snapshot.phase {
        Phase::Idle | Phase::Resolving => "…",
        Phase::Resolved => "✓",
        Phase::FallbackComputed => "~",
        Phase::Unsupported => "·",
    };
    format!(
        "{marker} {}\n{}",
        selection_label(&snapshot.selection, locale),
        render_view(&snapshot.view, locale)
    )
}

pub fn render_catalog(listing: &CatalogListing) -> String {
    let mut out = String::new();

    out.push_str("Crops:\n");
    for crop in &listing.crops {
        out.push_str(&format!("  {:<14} {}\n", crop.id, crop.name));
    }

    out.push_str("Regions:\n");
    let mut current_group = "";
    for region in &listing.regions {
        if region.group != current_group {
            out.push_str(&format!("  [{}]\n", region.group));
            current_group = region.group;
        }
        out.push_str(&format!("    {:<14} {}\n", region.id, region.name));
    }

    out.push_str("Scenarios:\n");
    for scenario in &listing.scenarios {
        out.push_str(&format!(
            "  {:<14} {} ({})\n",
            scenario.id, scenario.name, scenario.description
        ));
    }

    let years: Vec<String> = listing.years.iter().map(|y| y.to_string()).collect();
    out.push_str(&format!("Years: {}\n", years.join(", ")));
    out
}

pub fn render_health(
    base_url: &str,
    health: &BackendHealth,
    years: Option<&AvailableYears>,
) -> String {
    let mut out = format!("Prediction API at {base_url}: {}\n", health.status);
    out.push_str(&format!("  model loaded:    {}\n", health.model_loaded));
    out.push_str(&format!("  features loaded: {}\n", health.features_loaded));
    if let Some(name) = &health.model_name {
        out.push_str(&format!("  model:           {name}\n"));
    }
    if let Some(count) = health.feature_count {
        out.push_str(&format!("  features:        {count}\n"));
    }
    if let Some(range) = &health.data_years_range {
        out.push_str(&format!("  data years:      {range}\n"));
    }
    if let Some(years) = years {
        out.push_str(&format!(
            "  feature years:   {}-{} ({} with yield data)\n",
            years.min_year,
            years.max_year,
            years.years_with_yield_data.len()
        ));
    }
    out
}

pub fn render_backtest(report: &BacktestReport, locale: Locale) -> String {
    let mut out = String::from("Year  Actual  Predicted  Error   Trained  Grade\n");
    for year in &report.years {
        out.push_str(&format!(
            "{}  {:>6}  {:>9}  {:>5.2}%  {:>7}  {}\n",
            year.year,
            format_yield(year.actual),
            format_yield(year.predicted),
            year.error_pct,
            year.train_years,
            year.grade.name(locale)
        ));
        out.push_str(&format!("      {}\n", year.explanation));
    }

    let summary = &report.summary;
    out.push_str(&format!(
        "Mean error {:.2}% over {} years (best {}, worst {})\n",
        summary.mean_error_pct, summary.total_years, summary.best_year, summary.worst_year
    ));

    out.push_str("Factors:\n");
    for factor in &report.factors {
        out.push_str(&format!(
            "  {:>5.1}%  {}: {}\n",
            factor.importance_pct, factor.name, factor.effect
        ));
    }
    out
}

pub fn render_year_prediction(prediction: &YearPrediction) -> String {
    format!(
        "{}: {} {} ({} - {})\n",
        prediction.year,
        format_yield(prediction.predicted_yield),
        prediction.unit,
        format_yield(prediction.confidence_lower),
        format_yield(prediction.confidence_upper)
    )
}

pub fn render_history(history: &YieldHistory) -> String {
    let mut out = String::from("Year  Actual  Predicted\n");
    for row in history.rows() {
        let actual = row.actual.map(format_yield).unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{}  {:>6}  {:>9}\n",
            row.year,
            actual,
            format_yield(row.predicted)
        ));
    }
    out
}

pub fn render_importance(importance: &FeatureImportance) -> String {
    importance
        .ranked()
        .into_iter()
        .map(|(name, score)| format!("  {score:.3}  {name}\n"))
        .collect()
}

pub fn render_weather(trend: &WeatherTrend) -> String {
    let mut out = String::from("Year  Rain Feb-Mar  Tmax May-Jun  Days >33  SPI Mar-Jun\n");
    let rows = trend
        .years
        .iter()
        .zip(&trend.rain_feb_mar)
        .zip(&trend.temp_max_may_jun)
        .zip(&trend.days_over_33)
        .zip(&trend.spi_mar_jun);
    for ((((year, rain), tmax), hot_days), spi) in rows {
        out.push_str(&format!(
            "{year}  {rain:>12.1}  {tmax:>12.1}  {hot_days:>8.0}  {spi:>11.2}\n"
        ));
    }
    out
}

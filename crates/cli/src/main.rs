//! # yieldcast-cli: A CLI for `yieldcast`
//!
//! This is the main entry point for the `yieldcast` command-line interface.

mod app;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use yieldcast::{
    backtest::report,
    catalog::listing,
    estimator::estimate,
    forecast_once,
    projector::{format_yield, StatusLine},
    providers::HttpPredictionProvider,
    types::{DEFAULT_CROP, DEFAULT_REGION, DEFAULT_SCENARIO, DEFAULT_YEAR},
    Locale, ScenarioResolver, SelectionTuple,
};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Base URL of the prediction API
    #[arg(
        long,
        global = true,
        env = "YIELDCAST_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,
    /// Seconds to wait for a prediction before showing the sample value
    #[arg(long, global = true, default_value_t = 10)]
    timeout_secs: u64,
    /// Display language ("vi" or "en")
    #[arg(long, global = true, default_value = "vi")]
    lang: String,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve one selection against the prediction API
    Forecast(SelectionArgs),
    /// Compute the offline sample value for a selection
    Estimate(SelectionArgs),
    /// List crops, provinces, scenarios and years
    Catalog,
    /// Check the prediction API's health
    Status,
    /// Change the selection interactively and watch the forecast update
    Interactive(SelectionArgs),
    /// Show the model's walk-forward backtest and its main weather drivers
    Backtest,
    /// Predict a past year from its observed weather
    PredictYear {
        /// The year to predict
        #[arg(long)]
        year: i32,
    },
    /// Show actual and predicted yields per year
    History,
    /// Rank the model's features by importance
    Importance,
    /// Show the key weather indicators per year
    Weather,
}

#[derive(Args, Debug)]
struct SelectionArgs {
    /// Crop id (see `catalog`)
    #[arg(long, default_value = DEFAULT_CROP)]
    crop: String,
    /// Province id (see `catalog`)
    #[arg(long, default_value = DEFAULT_REGION)]
    region: String,
    /// Forecast year
    #[arg(long, default_value_t = DEFAULT_YEAR)]
    year: i32,
    /// Scenario id (see `catalog`)
    #[arg(long, default_value = DEFAULT_SCENARIO)]
    scenario: String,
}

impl SelectionArgs {
    fn selection(&self) -> SelectionTuple {
        SelectionTuple::new(&self.crop, &self.region, self.year, &self.scenario)
    }
}

impl Cli {
    fn locale(&self) -> Result<Locale> {
        self.lang.parse().map_err(|e: String| anyhow!(e))
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn backend(&self) -> Result<HttpPredictionProvider> {
        Ok(HttpPredictionProvider::with_timeout(&self.api_url, self.timeout())?)
    }

    fn resolver(&self) -> Result<ScenarioResolver> {
        Ok(ScenarioResolver::builder()
            .api_url(&self.api_url)
            .timeout(self.timeout())
            .build()?)
    }
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging to a file
    let log_file = File::create("yieldcast-cli.log")?;
    let subscriber = fmt::Subscriber::builder()
        .with_writer(log_file)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let locale = cli.locale()?;

    match &cli.command {
        Commands::Forecast(args) => handle_forecast(&cli, args, locale).await,
        Commands::Estimate(args) => handle_estimate(&cli, args, locale),
        Commands::Catalog => handle_catalog(&cli, locale),
        Commands::Status => handle_status(&cli).await,
        Commands::Interactive(args) => {
            let app = app::App::new(cli.resolver()?, args.selection(), locale);
            app::run(app).await
        }
        Commands::Backtest => handle_backtest(&cli, locale),
        Commands::PredictYear { year } => handle_predict_year(&cli, *year).await,
        Commands::History => handle_history(&cli).await,
        Commands::Importance => handle_importance(&cli).await,
        Commands::Weather => handle_weather(&cli).await,
    }
}

// --- Command Handlers ---

async fn handle_forecast(cli: &Cli, args: &SelectionArgs, locale: Locale) -> Result<()> {
    let selection = args.selection();
    info!("Forecasting {selection} via {}", cli.api_url);

    let forecast = forecast_once(&cli.resolver()?, selection).await;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
    } else {
        println!("{}", ui::render_forecast(&forecast, locale));
    }
    Ok(())
}

fn handle_estimate(cli: &Cli, args: &SelectionArgs, locale: Locale) -> Result<()> {
    let selection = args.selection();
    let result = estimate(&selection);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", ui::selection_label(&selection, locale));
        println!("  {}", format_yield(result.predicted_yield));
        println!("  {}", StatusLine::SampleValue.text(locale));
    }
    Ok(())
}

fn handle_catalog(cli: &Cli, locale: Locale) -> Result<()> {
    let catalog = listing(locale);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        print!("{}", ui::render_catalog(&catalog));
    }
    Ok(())
}

async fn handle_status(cli: &Cli) -> Result<()> {
    let backend = cli.backend()?;
    let health = backend
        .health()
        .await
        .with_context(|| format!("Prediction API at {} is unavailable", backend.base_url()))?;

    // Older backends do not serve `/years`.
    let years = match backend.available_years().await {
        Ok(years) => Some(years),
        Err(e) => {
            info!("Skipping available years: {e}");
            None
        }
    };

    if cli.json {
        let report = serde_json::json!({ "health": health, "years": years });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!(
            "{}",
            ui::render_health(backend.base_url(), &health, years.as_ref())
        );
    }
    Ok(())
}

fn handle_backtest(cli: &Cli, locale: Locale) -> Result<()> {
    print_with(cli, &report(locale), |r| ui::render_backtest(r, locale))
}

/// Prints `value` as JSON or through `render`, whichever the flags ask for.
fn print_with<T: Serialize>(cli: &Cli, value: &T, render: impl Fn(&T) -> String) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", render(value));
    }
    Ok(())
}

async fn handle_predict_year(cli: &Cli, year: i32) -> Result<()> {
    let backend = cli.backend()?;
    info!("Predicting year {year} via {}", backend.base_url());
    let prediction = backend
        .predict_year(year)
        .await
        .with_context(|| format!("Could not predict year {year}"))?;
    print_with(cli, &prediction, ui::render_year_prediction)
}

async fn handle_history(cli: &Cli) -> Result<()> {
    let history = cli
        .backend()?
        .yield_history()
        .await
        .context("Could not fetch the yield history")?;
    print_with(cli, &history, ui::render_history)
}

async fn handle_importance(cli: &Cli) -> Result<()> {
    let importance = cli
        .backend()?
        .feature_importance()
        .await
        .context("Could not fetch feature importance")?;
    print_with(cli, &importance, ui::render_importance)
}

async fn handle_weather(cli: &Cli) -> Result<()> {
    let trend = cli
        .backend()?
        .weather_trend()
        .await
        .context("Could not fetch the weather trend")?;
    print_with(cli, &trend, ui::render_weather)
}

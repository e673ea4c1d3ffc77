use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use yieldcast::{forecast_once, Locale, ScenarioResolver, SelectionTuple};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging and load .env file
    tracing_subscriber::fmt::init();
    dotenv().ok();

    // --- Command-line argument parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() > 1 && (args[1] == "-h" || args[1] == "--help") {
        eprintln!("Usage: {} [crop] [region] [year] [scenario]", args[0]);
        eprintln!();
        eprintln!("Example: {} coffee dak-lak 2026 drought", args[0]);
        return Ok(());
    }

    let defaults = SelectionTuple::default();
    let crop = args.get(1).cloned().unwrap_or(defaults.crop);
    let region = args.get(2).cloned().unwrap_or(defaults.region);
    let year = match args.get(3) {
        Some(year) => year.parse::<i32>()?,
        None => defaults.year,
    };
    let scenario = args.get(4).cloned().unwrap_or(defaults.scenario);

    // --- Configuration from environment variables ---
    let api_url =
        env::var("YIELDCAST_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let timeout_secs = env::var("YIELDCAST_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(10);

    // --- Build Resolver ---
    let resolver = ScenarioResolver::builder()
        .api_url(api_url)
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;

    // --- Resolve ---
    let selection = SelectionTuple::new(crop, region, year, scenario);
    let forecast = forecast_once(&resolver, selection).await;

    println!("--- {} ---", forecast.selection);
    if let Some(text) = forecast.view.yield_text() {
        println!("{text} tấn/ha");
    }
    println!("{}", forecast.view.status().text(Locale::Vi));

    if let Some(failure) = forecast.resolution.and_then(|r| r.failure) {
        println!("\n--- Fallback Reason ---");
        println!("{failure:?}");
    }

    Ok(())
}

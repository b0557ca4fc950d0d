//! Citycast command-line front end
//!
//! Argument parsing and adapter wiring for the `citycast` binary, kept in a
//! library so the whole pipeline can be exercised from tests.

use std::path::PathBuf;
use std::sync::Arc;

use application::ports::ChartPort;
use application::{ApplicationError, CitycastService, RunSummary};
use clap::Parser;
use domain::default_cities;
use infrastructure::{
    AppConfig, Credentials, JsonSnapshotStore, NewsAdapter, NoopChartRenderer, SvgChartRenderer,
    TextReportWriter, WeatherAdapter,
};
use tracing::info;

/// Fetch current weather, a 5-day forecast and top headlines for a fixed set
/// of cities, then write a chart, a text report and a JSON snapshot.
#[derive(Debug, Parser)]
#[command(name = "citycast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (defaults to ./citycast.toml when present)
    #[arg(short, long, env = "CITYCAST_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Wire the adapters described by `config` into a service
///
/// # Errors
///
/// Returns an error if a provider client or the chart template cannot be
/// initialized.
pub fn build_service(
    config: &AppConfig,
    credentials: &Credentials,
) -> Result<CitycastService, ApplicationError> {
    let weather =
        WeatherAdapter::with_config(config.weather.client_config(&credentials.openweather_api_key))?;
    let news = NewsAdapter::with_config(config.news.client_config(&credentials.news_api_key))?;

    let chart: Arc<dyn ChartPort> = if config.output.render_chart {
        Arc::new(SvgChartRenderer::new(&config.output.chart_path)?)
    } else {
        Arc::new(NoopChartRenderer)
    };

    Ok(CitycastService::new(
        Arc::new(weather),
        Arc::new(news),
        chart,
        Arc::new(TextReportWriter::new(&config.output.report_path)),
        Arc::new(JsonSnapshotStore::new(&config.output.snapshot_path)),
    ))
}

/// Run the pipeline over the built-in city list
///
/// # Errors
///
/// Only wiring failures are returned; fetch and output failures are logged
/// and reflected in the summary.
pub async fn run(
    config: &AppConfig,
    credentials: &Credentials,
) -> Result<RunSummary, ApplicationError> {
    let service = build_service(config, credentials)?;
    let cities = default_cities();

    info!(cities = cities.len(), "Starting run");
    let summary = service.run(&cities).await;
    info!(
        processed = summary.processed,
        collected = summary.collected,
        skipped = summary.skipped,
        artifacts = summary.artifacts.len(),
        output_failures = summary.output_failures,
        "Run finished"
    );

    Ok(summary)
}

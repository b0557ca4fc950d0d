//! Run orchestration
//!
//! Drives one pass over the city list: fetch, merge, then emit the chart,
//! the text report and the JSON snapshot.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use domain::{CityRecord, CityRequest};
use tracing::{debug, error, info, instrument, warn};

use super::merge::merge_city_data;
use super::report::{build_temperature_chart, render_text_report};
use crate::ports::{ChartPort, NewsPort, ReportPort, SnapshotPort, WeatherPort};

/// Outcome of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Cities attempted
    pub processed: usize,
    /// Cities that produced a record
    pub collected: usize,
    /// Cities dropped for missing weather data
    pub skipped: usize,
    /// Files written, in write order
    pub artifacts: Vec<PathBuf>,
    /// Output steps (chart, report, snapshot) that failed
    pub output_failures: usize,
}

impl RunSummary {
    /// Whether no city produced a record
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.collected == 0
    }
}

/// Sequential fetch/merge/emit pipeline over a city list
pub struct CitycastService {
    weather: Arc<dyn WeatherPort>,
    news: Arc<dyn NewsPort>,
    chart: Arc<dyn ChartPort>,
    report: Arc<dyn ReportPort>,
    snapshot: Arc<dyn SnapshotPort>,
}

impl fmt::Debug for CitycastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CitycastService")
            .field("weather", &"<WeatherPort>")
            .field("news", &"<NewsPort>")
            .field("chart", &"<ChartPort>")
            .field("report", &"<ReportPort>")
            .field("snapshot", &"<SnapshotPort>")
            .finish()
    }
}

impl CitycastService {
    #[must_use]
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        news: Arc<dyn NewsPort>,
        chart: Arc<dyn ChartPort>,
        report: Arc<dyn ReportPort>,
        snapshot: Arc<dyn SnapshotPort>,
    ) -> Self {
        Self {
            weather,
            news,
            chart,
            report,
            snapshot,
        }
    }

    /// Fetch and merge every city in order
    ///
    /// News is requested even when weather failed. Cities lacking current
    /// conditions or a forecast are left out.
    pub async fn collect(&self, cities: &[CityRequest]) -> Vec<CityRecord> {
        let mut records = Vec::with_capacity(cities.len());

        for city in cities {
            debug!(city = %city, "Processing city");
            let (current, forecast) = self.weather.fetch_weather(city).await;
            let news = self.news.fetch_news(city).await;

            if let Some(record) = merge_city_data(city.name(), current, forecast, news.as_ref()) {
                records.push(record);
            }
        }

        records
    }

    /// Run the whole pipeline
    ///
    /// Output failures are logged and counted; they never abort the run.
    #[instrument(skip(self, cities), fields(cities = cities.len()))]
    pub async fn run(&self, cities: &[CityRequest]) -> RunSummary {
        let records = self.collect(cities).await;

        let mut summary = RunSummary {
            processed: cities.len(),
            collected: records.len(),
            skipped: cities.len() - records.len(),
            ..RunSummary::default()
        };

        if records.is_empty() {
            warn!("No data available to generate report or visualization.");
            return summary;
        }

        let chart = build_temperature_chart(&records);
        match self.chart.render(&chart).await {
            Ok(Some(path)) => {
                info!(path = %path.display(), "Temperature chart written");
                summary.artifacts.push(path);
            },
            Ok(None) => debug!("Chart rendering disabled"),
            Err(e) => {
                error!(error = %e, "Failed to render temperature chart");
                summary.output_failures += 1;
            },
        }

        let report = render_text_report(&records);
        match self.report.write_report(&report).await {
            Ok(path) => summary.artifacts.push(path),
            Err(e) => {
                error!(error = %e, "Failed to write summary report");
                summary.output_failures += 1;
            },
        }

        match self.snapshot.save(&records).await {
            Ok(path) => {
                info!(path = %path.display(), records = records.len(), "Data saved");
                summary.artifacts.push(path);
            },
            Err(e) => {
                error!(error = %e, "Failed to save data snapshot");
                summary.output_failures += 1;
            },
        }

        summary
    }
}


#[cfg(test)]
mod proptest_tests {
    use domain::{CurrentConditions, NO_NEWS_HEADLINE, default_cities};
    use proptest::prelude::*;

    use super::*;
    use crate::ports::{
        ForecastSeries, MockChartPort, MockNewsPort, MockReportPort, MockSnapshotPort,
        MockWeatherPort,
    };

    proptest! {
        #[test]
        fn news_outcome_never_drops_a_record(news_ok in prop::collection::vec(any::<bool>(), 5)) {
            let mut weather = MockWeatherPort::new();
            weather.expect_fetch_weather().returning(|_| {
                (
                    Some(CurrentConditions { temperature: 12.0, description: "mist".to_string() }),
                    Some(ForecastSeries::default()),
                )
            });

            let outcomes = news_ok.clone();
            let mut calls = 0usize;
            let mut news = MockNewsPort::new();
            news.expect_fetch_news().returning(move |_| {
                let ok = outcomes[calls];
                calls += 1;
                ok.then(crate::ports::NewsFeed::default)
            });

            let svc = CitycastService::new(
                Arc::new(weather),
                Arc::new(news),
                Arc::new(MockChartPort::new()),
                Arc::new(MockReportPort::new()),
                Arc::new(MockSnapshotPort::new()),
            );

            let records = tokio_test::block_on(svc.collect(&default_cities()));
            prop_assert_eq!(records.len(), 5);
            for record in &records {
                prop_assert_eq!(&record.news_headlines, &vec![NO_NEWS_HEADLINE.to_string()]);
            }
        }
    }
}

//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod chart_port;
mod news_port;
mod report_port;
mod snapshot_port;
mod weather_port;

pub use chart_port::{ChartPort, TemperatureBar, TemperatureChart};
#[cfg(test)]
pub use chart_port::MockChartPort;
pub use news_port::{NewsArticle, NewsFeed, NewsPort};
#[cfg(test)]
pub use news_port::MockNewsPort;
pub use report_port::ReportPort;
#[cfg(test)]
pub use report_port::MockReportPort;
pub use snapshot_port::SnapshotPort;
#[cfg(test)]
pub use snapshot_port::MockSnapshotPort;
pub use weather_port::{ForecastEntry, ForecastSeries, WeatherPort};
#[cfg(test)]
pub use weather_port::MockWeatherPort;

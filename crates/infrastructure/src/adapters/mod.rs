//! Adapters implementing application ports

mod chart_renderer;
mod news_adapter;
mod report_writer;
mod weather_adapter;

pub use chart_renderer::{NoopChartRenderer, SvgChartRenderer};
pub use news_adapter::NewsAdapter;
pub use report_writer::TextReportWriter;
pub use weather_adapter::WeatherAdapter;

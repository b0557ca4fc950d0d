//! Application services - Use case implementations

mod citycast_service;
#[cfg(test)]
mod log_capture;
pub mod merge;
pub mod report;

pub use citycast_service::{CitycastService, RunSummary};
pub use merge::{merge_city_data, sample_daily_forecast, top_headlines};
pub use report::{REPORT_SEPARATOR, build_temperature_chart, render_city_block, render_text_report};

//! Chart rendering port

use std::path::PathBuf;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::Serialize;

use crate::error::ApplicationError;

/// One bar of the temperature chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureBar {
    pub city: String,
    /// Current temperature in Celsius
    pub temperature: f64,
}

/// Renderer-independent description of the temperature bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Bars in record order
    pub bars: Vec<TemperatureBar>,
}

/// Port for drawing the temperature chart
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChartPort: Send + Sync {
    /// Render the chart; returns the written file, if the renderer produces one
    async fn render(&self, chart: &TemperatureChart) -> Result<Option<PathBuf>, ApplicationError>;
}

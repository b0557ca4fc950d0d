//! Chart adapters - Implement ChartPort

use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::{ChartPort, TemperatureChart};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::templates::TemplateEngine;

/// Writes the chart as an SVG file
#[derive(Debug, Clone)]
pub struct SvgChartRenderer {
    engine: TemplateEngine,
    path: PathBuf,
}

impl SvgChartRenderer {
    /// Create a renderer writing to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded template fails to compile.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ApplicationError> {
        let engine =
            TemplateEngine::new().map_err(|e| ApplicationError::Rendering(e.to_string()))?;
        Ok(Self {
            engine,
            path: path.into(),
        })
    }

    /// Target file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ChartPort for SvgChartRenderer {
    #[instrument(skip(self, chart), fields(path = %self.path.display(), bars = chart.bars.len()))]
    async fn render(&self, chart: &TemperatureChart) -> Result<Option<PathBuf>, ApplicationError> {
        let svg = self
            .engine
            .render_temperature_chart(chart)
            .map_err(|e| ApplicationError::Rendering(e.to_string()))?;

        tokio::fs::write(&self.path, svg).await.map_err(|e| {
            ApplicationError::Io(format!("{}: {e}", self.path.display()))
        })?;

        debug!("Chart written");
        Ok(Some(self.path.clone()))
    }
}

/// Renders nothing; used when charts are disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopChartRenderer;

#[async_trait]
impl ChartPort for NoopChartRenderer {
    async fn render(&self, chart: &TemperatureChart) -> Result<Option<PathBuf>, ApplicationError> {
        debug!(bars = chart.bars.len(), "Chart rendering skipped");
        Ok(None)
    }
}

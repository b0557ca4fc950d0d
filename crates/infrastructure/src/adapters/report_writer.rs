//! Text report adapter - Implements ReportPort

use std::path::PathBuf;

use application::error::ApplicationError;
use application::ports::ReportPort;
use async_trait::async_trait;
use tracing::info;

/// Writes the report to a fixed path, replacing previous content
#[derive(Debug, Clone)]
pub struct TextReportWriter {
    path: PathBuf,
}

impl TextReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReportPort for TextReportWriter {
    async fn write_report(&self, contents: &str) -> Result<PathBuf, ApplicationError> {
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| ApplicationError::Io(format!("{}: {e}", self.path.display())))?;

        info!("Report saved to {}", self.path.display());
        Ok(self.path.clone())
    }
}

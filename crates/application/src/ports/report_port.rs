//! Text report sink port

use std::path::PathBuf;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for writing the rendered text report
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReportPort: Send + Sync {
    /// Write the report, replacing any previous one; returns the written path
    async fn write_report(&self, contents: &str) -> Result<PathBuf, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ReportPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ReportPort>();
    }
}

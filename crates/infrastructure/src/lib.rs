//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer on top of the
//! provider clients and the local filesystem, and owns configuration and
//! logging setup.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{
    AppConfig, ConfigError, Credentials, LogFormat, LoggingConfig, NewsAppConfig, OutputConfig,
    WeatherAppConfig,
};
pub use persistence::{JsonSnapshotStore, PersistenceError};
pub use telemetry::{TelemetryError, init_logging, log_filter};
pub use templates::{TemplateEngine, TemplateError};

//! Application layer - Use cases and orchestration
//!
//! Defines the ports the pipeline talks through, the pure merge and report
//! logic, and [`CitycastService`], which drives one run over a city list.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

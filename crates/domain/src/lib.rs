//! Domain layer for Citycast
//!
//! Contains the city requests, merged city records and domain errors.
//! This layer has no I/O and defines the vocabulary shared by every other crate.

pub mod cities;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use cities::default_cities;
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

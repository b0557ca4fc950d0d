//! Value Objects - Immutable, identity-less domain primitives

mod city_request;

pub use city_request::CityRequest;

//! Domain layer for Stratus
//!
//! Contains the validated weather data model and the pure daily aggregation
//! algorithm. This layer has no I/O dependencies and defines the ubiquitous
//! language: samples, daily summaries, forecasts.

pub mod aggregate;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use aggregate::aggregate_daily;
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

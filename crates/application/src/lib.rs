//! Application layer - Use cases and orchestration
//!
//! Contains the port definitions for external collaborators (weather
//! provider, secret store, language model) and the services that orchestrate
//! domain objects into the three weather tools.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

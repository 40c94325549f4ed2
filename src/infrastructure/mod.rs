//! Infrastructure layer: category sources and DI container
//!
//! This layer implements the source boundary trait and wires up services.

pub mod di;
pub mod error;
pub mod traits;

pub use error::{InfraError, InfraResult};

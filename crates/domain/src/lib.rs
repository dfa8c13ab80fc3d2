//! Domain layer for the geocoding gateway
//!
//! Contains the provider-independent geocoding model: validated points,
//! canonical queries and the canonical result shape returned to callers.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::QueryError;
pub use value_objects::*;

//! Domain models and operation-specific parameter types.
//!
//! Models here are independent of both the database entities and the wire DTOs. They are
//! built from entities at the repository boundary and converted into DTOs at the
//! controller boundary.

pub mod section;
pub mod settings;
pub mod user;

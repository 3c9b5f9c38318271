//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON shapes that cross the wire. Server-side domain models
//! live in `server::model` and convert into these at the controller boundary.

pub mod api;
pub mod settings;

//! Database repository layer.
//!
//! Repositories wrap SeaORM entity queries for users and settings documents. They
//! return entity models; conversion into domain models happens in the caller.

pub mod settings;
pub mod user;

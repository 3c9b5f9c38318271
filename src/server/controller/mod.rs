//! HTTP request handlers.
//!
//! Handlers authenticate the request, convert the wire format into service parameters,
//! call the service and wrap the result in the response envelope.

pub mod health;
pub mod settings;

#[cfg(test)]
mod test;

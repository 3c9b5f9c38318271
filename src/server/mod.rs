//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the settings service: API endpoints,
//! business logic, data access and infrastructure. The backend uses Axum as the web
//! framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, authentication, and DTO conversion
//! - **Service Layer** (`service/`) - Read-modify-write of settings documents and token checks
//! - **Data Layer** (`data/`) - Database operations on users and settings rows
//! - **Model Layer** (`model/`) - Domain models, section schemas, and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, token verifier, settings flags)
//! - **Startup** (`startup`) - Tracing, database, CORS, and shutdown setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** authenticates through `AuthGuard` and parses the body and headers
//! 3. **Service** loads the document, applies the change, and writes it back
//! 4. **Data** queries the database and returns entity models
//! 5. **Controller** converts the domain model to a DTO and returns the JSON envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

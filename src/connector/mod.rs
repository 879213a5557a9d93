//! # Connector Layer
//!
//! External integrations implementing the application interfaces:
//! - HTTP transport and typed clients for the backend API
//! - In-memory mock services for running without a backend
//! - The CLI surface (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;

//! # Domain Layer
//!
//! Wire-level request/response records and the client error type.
//! This layer is independent of any transport library.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;

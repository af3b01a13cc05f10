//! # Domain Layer
//!
//! Request-scoped value types and the error taxonomy.
//! This layer is independent of HTTP frameworks and remote services.

pub mod models;
pub mod services;

pub use models::*;
pub use services::*;

//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Search (Azure Cognitive Search, in-process mock)
//! - Chat completion (Azure OpenAI, in-process mock)
//! - HTTP API (axum router, controller, dependency container)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;

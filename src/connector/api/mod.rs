pub mod container;
pub mod controller;
pub mod errors;
pub mod models;
pub mod router;

pub use container::{Container, ContainerConfig};
pub use errors::ApiError;
pub use models::{ChatRequest, ChatResponse};
pub use router::{create_router, serve, CHAT_PATH};

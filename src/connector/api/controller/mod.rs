pub mod chat_controller;
pub mod health_controller;

use std::sync::Arc;

use crate::application::ChatUseCase;

pub use chat_controller::{chat, preflight};
pub use health_controller::health;

/// State shared by the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatUseCase>,
}

impl AppState {
    pub fn new(chat: Arc<ChatUseCase>) -> Self {
        Self { chat }
    }
}

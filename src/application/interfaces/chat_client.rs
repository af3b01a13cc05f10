use async_trait::async_trait;

use crate::domain::{Completion, DomainError, GenerationParams};

/// An interface for sending a single prompt to an LLM and receiving the generated text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::ChatUseCase`]) remain decoupled
/// from any particular provider or HTTP client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `prompt` as a `user` message and return the assistant's response text.
    async fn complete(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Completion, DomainError>;

    /// Deployment or model name, for logging.
    fn model_name(&self) -> &str;
}

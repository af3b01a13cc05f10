use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ChatClient;
use crate::domain::{Completion, DomainError, GenerationParams};

enum Reply {
    Echo,
    Fixed(String),
    Fail,
}

/// In-process [`ChatClient`]. By default it echoes the prompt back, which keeps
/// `--mock-services` runs readable and lets tests inspect the composed prompt.
pub struct MockChatClient {
    reply: Reply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::build(Reply::Echo)
    }

    pub fn fixed(text: impl Into<String>) -> Self {
        Self::build(Reply::Fixed(text.into()))
    }

    pub fn failing() -> Self {
        Self::build(Reply::Fail)
    }

    fn build(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<Completion, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.reply {
            Reply::Echo => Ok(Completion::new(prompt)),
            Reply::Fixed(text) => Ok(Completion::new(text.clone())),
            Reply::Fail => Err(DomainError::completion("MockChatClient: simulated failure")),
        }
    }

    fn model_name(&self) -> &str {
        "mock-chat"
    }
}

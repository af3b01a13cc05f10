use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};

use super::{ComposePromptUseCase, Composition};
use crate::application::ChatClient;
use crate::domain::{Completion, DomainError, GenerationParams};

/// Outcome of a chat request that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    Answered(Completion),
    /// No prompt could be composed, or the model returned nothing.
    NoData,
}

/// Compose a prompt for the user's input and ask the completion service.
pub struct ChatUseCase {
    composer: ComposePromptUseCase,
    chat_client: Arc<dyn ChatClient>,
    params: GenerationParams,
}

impl ChatUseCase {
    pub fn new(composer: ComposePromptUseCase, chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            composer,
            chat_client,
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub async fn execute(&self, input: &str) -> Result<ChatOutcome, DomainError> {
        if input.is_empty() {
            return Err(DomainError::invalid_input("input text is empty"));
        }

        let prompt = match self.composer.execute(input).await? {
            Composition::Ready(prompt) => prompt,
            Composition::SearchUnavailable => {
                warn!("No prompt composed; skipping completion");
                return Ok(ChatOutcome::NoData);
            }
        };

        info!(
            "Requesting completion from {} (augmented={})",
            self.chat_client.model_name(),
            prompt.is_augmented()
        );

        let start_time = Instant::now();
        let completion = self
            .chat_client
            .complete(&prompt.render(), &self.params)
            .await
            .map_err(|e| {
                error!("An error occurred while generating chat response: {}", e);
                e
            })?;

        info!(
            "Completion received in {:.2}s",
            start_time.elapsed().as_secs_f64()
        );

        if completion.is_empty() {
            Ok(ChatOutcome::NoData)
        } else {
            Ok(ChatOutcome::Answered(completion))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RetrieveContextUseCase;
    use crate::connector::{MockChatClient, MockSearchIndex};
    use crate::domain::SearchHit;

    fn use_case(index: Arc<MockSearchIndex>, client: Arc<MockChatClient>) -> ChatUseCase {
        ChatUseCase::new(
            ComposePromptUseCase::new(RetrieveContextUseCase::new(index)),
            client,
        )
    }

    #[tokio::test]
    async fn test_search_runs_once_before_completion() {
        let index = Arc::new(MockSearchIndex::with_hits(vec![SearchHit::new(
            "Dev Squad ships on Fridays.",
            2.0,
        )]));
        let client = Arc::new(MockChatClient::new());

        let outcome = use_case(index.clone(), client.clone())
            .execute("When does the Dev Squad ship?")
            .await
            .unwrap();

        assert_eq!(index.calls(), 1);
        assert_eq!(client.calls(), 1);
        // The completion saw the retrieved text, so the search finished first.
        let prompts = client.prompts();
        assert!(prompts[0].contains("'Dev Squad ships on Fridays.'"));
        assert!(matches!(outcome, ChatOutcome::Answered(_)));
    }

    #[tokio::test]
    async fn test_plain_input_reaches_model_verbatim() {
        let index = Arc::new(MockSearchIndex::new());
        let client = Arc::new(MockChatClient::fixed("Paris"));

        let outcome = use_case(index.clone(), client.clone())
            .execute("Capital of France?")
            .await
            .unwrap();

        assert_eq!(outcome, ChatOutcome::Answered(Completion::new("Paris")));
        assert_eq!(index.calls(), 0);
        assert_eq!(client.prompts(), vec!["Capital of France?".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_completion_is_no_data() {
        let client = Arc::new(MockChatClient::fixed(""));
        let outcome = use_case(Arc::new(MockSearchIndex::new()), client)
            .execute("hello")
            .await
            .unwrap();

        assert_eq!(outcome, ChatOutcome::NoData);
    }

    #[tokio::test]
    async fn test_search_failure_skips_completion() {
        let client = Arc::new(MockChatClient::new());
        let outcome = use_case(Arc::new(MockSearchIndex::failing()), client.clone())
            .execute("CSU budget")
            .await
            .unwrap();

        assert_eq!(outcome, ChatOutcome::NoData);
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_completion_failure_propagates() {
        let result = use_case(
            Arc::new(MockSearchIndex::new()),
            Arc::new(MockChatClient::failing()),
        )
        .execute("hello")
        .await;

        assert!(matches!(result, Err(DomainError::CompletionError(_))));
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected() {
        let client = Arc::new(MockChatClient::new());
        let result = use_case(Arc::new(MockSearchIndex::new()), client.clone())
            .execute("")
            .await;

        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
        assert_eq!(client.calls(), 0);
    }
}

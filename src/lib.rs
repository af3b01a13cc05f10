pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, ChatOutcome, ChatUseCase, ComposePromptUseCase, Composition,
    RetrieveContextUseCase, SearchFailurePolicy, SearchIndex,
};

pub use connector::{
    create_router, read_api_key, serve, AzureChatClient, AzureSearchClient, Container,
    ContainerConfig, MockChatClient, MockSearchIndex, CHAT_PATH,
};

pub use domain::{
    contains_trigger, top_scoring, Completion, DomainError, GenerationParams, Prompt, SearchHit,
    SearchQuery, TRIGGER_KEYWORDS,
};

use std::fmt;
use std::str::FromStr;

use tracing::{debug, error, info};

use super::RetrieveContextUseCase;
use crate::domain::{contains_trigger, DomainError, Prompt};

/// What to do when the search index fails for a triggered query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFailurePolicy {
    /// Log the failure and produce no prompt; the request answers "No data".
    #[default]
    Degrade,
    /// Surface the failure to the caller.
    Fail,
}

impl FromStr for SearchFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "degrade" => Ok(Self::Degrade),
            "fail" => Ok(Self::Fail),
            other => Err(format!(
                "unknown search failure policy '{other}' (expected 'degrade' or 'fail')"
            )),
        }
    }
}

impl fmt::Display for SearchFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrade => f.write_str("degrade"),
            Self::Fail => f.write_str("fail"),
        }
    }
}

/// Result of prompt composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    Ready(Prompt),
    /// A trigger matched but the search index could not be queried.
    SearchUnavailable,
}

pub struct ComposePromptUseCase {
    retriever: RetrieveContextUseCase,
    on_search_failure: SearchFailurePolicy,
}

impl ComposePromptUseCase {
    pub fn new(retriever: RetrieveContextUseCase) -> Self {
        Self {
            retriever,
            on_search_failure: SearchFailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: SearchFailurePolicy) -> Self {
        self.on_search_failure = policy;
        self
    }

    pub async fn execute(&self, input: &str) -> Result<Composition, DomainError> {
        if !contains_trigger(input) {
            debug!("No trigger keyword; forwarding input unchanged");
            return Ok(Composition::Ready(Prompt::passthrough(input)));
        }

        info!("Trigger keyword found; augmenting prompt with search context");

        match self.retriever.execute(input).await {
            Ok(context) => Ok(Composition::Ready(Prompt::augmented(context, input))),
            Err(e) => {
                error!("Failed to perform search query: {}", e);
                match self.on_search_failure {
                    SearchFailurePolicy::Degrade => Ok(Composition::SearchUnavailable),
                    SearchFailurePolicy::Fail => Err(e),
                }
            }
        }
    }
}

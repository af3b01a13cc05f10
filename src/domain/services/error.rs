use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Search error: {0}")]
    SearchError(String),

    #[error("Completion error: {0}")]
    CompletionError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn search(msg: impl Into<String>) -> Self {
        Self::SearchError(msg.into())
    }

    pub fn completion(msg: impl Into<String>) -> Self {
        Self::CompletionError(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

use async_trait::async_trait;

use crate::domain::{DomainError, SearchHit, SearchQuery};

/// A remote full-text index that ranks documents against a query.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Run one query and return the candidates in the order the index sent them.
    ///
    /// Implementations request at most `query.top()` matches. A non-success
    /// response or an unreadable payload is an error; an empty result is not.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, DomainError>;
}

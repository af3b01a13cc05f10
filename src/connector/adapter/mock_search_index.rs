use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::application::SearchIndex;
use crate::domain::{DomainError, SearchHit, SearchQuery};

/// In-process [`SearchIndex`] returning canned hits. Used by `--mock-services`
/// and by tests that need to observe how often the index is queried.
pub struct MockSearchIndex {
    hits: Vec<SearchHit>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockSearchIndex {
    pub fn new() -> Self {
        Self::with_hits(vec![SearchHit::new(
            "The Dev Squad is a cross-functional team inside the Customer Success Unit (CSU).",
            1.0,
        )])
    }

    pub fn with_hits(hits: Vec<SearchHit>) -> Self {
        Self {
            hits,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// An index whose every query fails.
    pub fn failing() -> Self {
        Self {
            hits: vec![],
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockSearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchIndex for MockSearchIndex {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        debug!("MockSearchIndex: query={:?} top={}", query.text(), query.top());

        if self.fail {
            return Err(DomainError::search("MockSearchIndex: simulated failure"));
        }

        Ok(self.hits.iter().take(query.top()).cloned().collect())
    }
}

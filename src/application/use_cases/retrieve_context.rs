use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::SearchIndex;
use crate::domain::{top_scoring, DomainError, SearchQuery};

/// Fetches the single most relevant document for a question.
pub struct RetrieveContextUseCase {
    index: Arc<dyn SearchIndex>,
}

impl RetrieveContextUseCase {
    pub fn new(index: Arc<dyn SearchIndex>) -> Self {
        Self { index }
    }

    /// Returns the content of the highest-scoring hit, or an empty string when
    /// the index has no match. Index failures propagate.
    pub async fn execute(&self, text: &str) -> Result<String, DomainError> {
        let query = SearchQuery::new(text);
        let start_time = Instant::now();

        let hits = self.index.search(&query).await?;

        info!(
            "Search returned {} hits in {:.2}s",
            hits.len(),
            start_time.elapsed().as_secs_f64()
        );

        match top_scoring(&hits) {
            Some(best) => {
                debug!("Selected hit with score {:.3}", best.score());
                Ok(best.content().to_string())
            }
            None => Ok(String::new()),
        }
    }
}

/// Number of matches requested from the search index per query.
pub const DEFAULT_TOP: usize = 3;

/// A single candidate returned by the search index.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    score: f64,
    content: String,
}

impl SearchHit {
    pub fn new(content: impl Into<String>, score: f64) -> Self {
        Self {
            score,
            content: content.into(),
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Pick the hit with the strictly greatest score.
///
/// Ties keep the first-seen hit; an empty slice yields `None`.
pub fn top_scoring(hits: &[SearchHit]) -> Option<&SearchHit> {
    let mut best: Option<&SearchHit> = None;
    for hit in hits {
        if best.map_or(true, |current| hit.score() > current.score()) {
            best = Some(hit);
        }
    }
    best
}

#[derive(Debug, Clone)]
pub struct SearchQuery {
    text: String,
    top: usize,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            top: DEFAULT_TOP,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn top(&self) -> usize {
        self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_scoring_picks_highest() {
        let hits = vec![
            SearchHit::new("low", 0.5),
            SearchHit::new("high", 0.9),
            SearchHit::new("lowest", 0.3),
        ];

        let best = top_scoring(&hits).expect("expected a hit");
        assert_eq!(best.content(), "high");
        assert_eq!(best.score(), 0.9);
    }

    #[test]
    fn test_top_scoring_keeps_first_on_tie() {
        let hits = vec![
            SearchHit::new("first", 1.2),
            SearchHit::new("second", 1.2),
        ];

        assert_eq!(top_scoring(&hits).unwrap().content(), "first");
    }

    #[test]
    fn test_top_scoring_empty() {
        assert!(top_scoring(&[]).is_none());
    }

    #[test]
    fn test_search_query_defaults() {
        let query = SearchQuery::new("what is CSU?");
        assert_eq!(query.text(), "what is CSU?");
        assert_eq!(query.top(), DEFAULT_TOP);
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::SearchIndex;
use crate::domain::{DomainError, SearchHit, SearchQuery};

pub const DEFAULT_SEARCH_API_VERSION: &str = "2021-04-30-Preview";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize)]
struct ApiRequest<'a> {
    search: &'a str,
    top: usize,
}

#[derive(Deserialize)]
struct ApiResponse {
    value: Vec<ApiDocument>,
}

#[derive(Deserialize)]
struct ApiDocument {
    #[serde(rename = "@search.score")]
    score: f64,
    content: String,
}

/// [`SearchIndex`] backed by the Azure Cognitive Search REST API.
///
/// Queries `POST {endpoint}/indexes/{index}/docs/search?api-version=...` with the
/// static `api-key` header. Every indexed document is expected to carry a
/// `content` field; a hit without one makes the whole response malformed.
pub struct AzureSearchClient {
    client: reqwest::Client,
    api_key: String,
    url: Url,
}

impl AzureSearchClient {
    /// `endpoint` is the service root, e.g. `https://my-service.search.windows.net`.
    pub fn new(
        endpoint: &str,
        index: &str,
        api_key: impl Into<String>,
        api_version: &str,
    ) -> Result<Self, DomainError> {
        let raw = format!(
            "{}/indexes/{}/docs/search",
            endpoint.trim_end_matches('/'),
            index
        );
        let mut url = Url::parse(&raw)
            .map_err(|e| DomainError::config(format!("invalid search endpoint {raw}: {e}")))?;
        url.query_pairs_mut().append_pair("api-version", api_version);

        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            url,
        })
    }

    /// Build the endpoint from a service name: `https://{service}.search.windows.net`.
    pub fn for_service(
        service: &str,
        index: &str,
        api_key: impl Into<String>,
        api_version: &str,
    ) -> Result<Self, DomainError> {
        let endpoint = format!("https://{service}.search.windows.net");
        Self::new(&endpoint, index, api_key, api_version)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        self
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

#[async_trait]
impl SearchIndex for AzureSearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, DomainError> {
        let request = ApiRequest {
            search: query.text(),
            top: query.top(),
        };

        let response = self
            .client
            .post(self.url.clone())
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::search(format!("AzureSearchClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("AzureSearchClient: API returned {status}: {body}");
            return Err(DomainError::search(format!(
                "AzureSearchClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::search(format!("AzureSearchClient: failed to parse response: {e}"))
        })?;

        debug!("AzureSearchClient: {} documents", api_response.value.len());

        Ok(api_response
            .value
            .into_iter()
            .map(|doc| SearchHit::new(doc.content, doc.score))
            .collect())
    }
}

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::{
    ChatClient, ChatUseCase, ComposePromptUseCase, RetrieveContextUseCase, SearchFailurePolicy,
    SearchIndex,
};
use crate::connector::adapter::{
    read_api_key, AzureChatClient, AzureSearchClient, MockChatClient, MockSearchIndex,
    DEFAULT_OPENAI_API_VERSION, DEFAULT_SEARCH_API_VERSION,
};
use crate::domain::GenerationParams;

pub struct ContainerConfig {
    /// Use in-process mock adapters instead of the Azure services.
    pub mock_services: bool,
    /// File holding the Azure Cognitive Search API key.
    pub search_key_file: PathBuf,
    pub search_service: Option<String>,
    /// Overrides the `https://{service}.search.windows.net` endpoint.
    pub search_endpoint: Option<String>,
    pub search_index: Option<String>,
    pub search_api_version: String,
    pub openai_endpoint: Option<String>,
    pub openai_deployment: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_api_version: String,
    pub timeout_secs: u64,
    pub search_failure: SearchFailurePolicy,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            mock_services: false,
            search_key_file: PathBuf::from("azure_search_key.txt"),
            search_service: None,
            search_endpoint: None,
            search_index: None,
            search_api_version: DEFAULT_SEARCH_API_VERSION.to_string(),
            openai_endpoint: None,
            openai_deployment: None,
            openai_api_key: None,
            openai_api_version: DEFAULT_OPENAI_API_VERSION.to_string(),
            timeout_secs: 30,
            search_failure: SearchFailurePolicy::default(),
        }
    }
}

/// Process-wide services, built once at startup and shared read-only.
pub struct Container {
    search_index: Arc<dyn SearchIndex>,
    chat_client: Arc<dyn ChatClient>,
    search_failure: SearchFailurePolicy,
    params: GenerationParams,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);

        let search_index: Arc<dyn SearchIndex> = if config.mock_services {
            debug!("Using mock search index");
            Arc::new(MockSearchIndex::new())
        } else {
            let api_key = read_api_key(&config.search_key_file).with_context(|| {
                format!(
                    "Failed to read Azure Cognitive Search API key from {}",
                    config.search_key_file.display()
                )
            })?;
            let index = config
                .search_index
                .as_deref()
                .context("A search index name is required (--search-index)")?;

            let client = match (&config.search_endpoint, &config.search_service) {
                (Some(endpoint), _) => {
                    AzureSearchClient::new(endpoint, index, api_key, &config.search_api_version)?
                }
                (None, Some(service)) => AzureSearchClient::for_service(
                    service,
                    index,
                    api_key,
                    &config.search_api_version,
                )?,
                (None, None) => anyhow::bail!(
                    "Either --search-service or --search-endpoint must be provided"
                ),
            };
            debug!("Using Azure Cognitive Search at {}", client.url());
            Arc::new(client.with_timeout(timeout))
        };

        let chat_client: Arc<dyn ChatClient> = if config.mock_services {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            let endpoint = config
                .openai_endpoint
                .as_deref()
                .context("AZURE_OPENAI_ENDPOINT is not set")?;
            let deployment = config
                .openai_deployment
                .clone()
                .context("AZURE_OPENAI_DEPLOYMENT_NAME is not set")?;
            let api_key = config
                .openai_api_key
                .clone()
                .context("AZURE_OPENAI_API_KEY is not set")?;

            let client =
                AzureChatClient::new(endpoint, deployment, api_key, &config.openai_api_version)?;
            debug!("Using Azure OpenAI deployment {}", client.model_name());
            Arc::new(client.with_timeout(timeout))
        };

        Ok(Self::with_services(
            search_index,
            chat_client,
            config.search_failure,
        ))
    }

    /// Wire explicit adapters, bypassing configuration.
    pub fn with_services(
        search_index: Arc<dyn SearchIndex>,
        chat_client: Arc<dyn ChatClient>,
        search_failure: SearchFailurePolicy,
    ) -> Self {
        Self {
            search_index,
            chat_client,
            search_failure,
            params: GenerationParams::default(),
        }
    }

    pub fn chat_use_case(&self) -> Arc<ChatUseCase> {
        let retriever = RetrieveContextUseCase::new(Arc::clone(&self.search_index));
        let composer =
            ComposePromptUseCase::new(retriever).with_failure_policy(self.search_failure);

        Arc::new(
            ChatUseCase::new(composer, Arc::clone(&self.chat_client)).with_params(self.params),
        )
    }

    pub fn search_failure(&self) -> SearchFailurePolicy {
        self.search_failure
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn azure_config(key_file: PathBuf) -> ContainerConfig {
        ContainerConfig {
            search_key_file: key_file,
            search_service: Some("acme".to_string()),
            search_index: Some("kb".to_string()),
            openai_endpoint: Some("https://acme.openai.azure.com".to_string()),
            openai_deployment: Some("gpt-35".to_string()),
            openai_api_key: Some("openai-key".to_string()),
            ..ContainerConfig::default()
        }
    }

    #[test]
    fn test_mock_services_need_no_credentials() {
        let config = ContainerConfig {
            mock_services: true,
            search_key_file: PathBuf::from("/nonexistent/key.txt"),
            ..ContainerConfig::default()
        };

        assert!(Container::new(config).is_ok());
    }

    #[test]
    fn test_missing_key_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = Container::new(azure_config(dir.path().join("missing.txt")));

        let err = result.err().expect("startup should fail").to_string();
        assert!(err.contains("Failed to read Azure Cognitive Search API key"));
    }

    #[test]
    fn test_azure_services_from_config() {
        let mut key_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(key_file, "search-key").unwrap();

        let container = Container::new(azure_config(key_file.path().to_path_buf())).unwrap();
        assert_eq!(container.search_failure(), SearchFailurePolicy::Degrade);
    }

    #[test]
    fn test_search_location_is_required() {
        let mut key_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(key_file, "search-key").unwrap();

        let config = ContainerConfig {
            search_service: None,
            ..azure_config(key_file.path().to_path_buf())
        };
        assert!(Container::new(config).is_err());
    }

    #[test]
    fn test_openai_settings_are_required() {
        let mut key_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(key_file, "search-key").unwrap();

        let config = ContainerConfig {
            openai_api_key: None,
            ..azure_config(key_file.path().to_path_buf())
        };
        let err = Container::new(config).err().unwrap().to_string();
        assert!(err.contains("AZURE_OPENAI_API_KEY"));
    }
}

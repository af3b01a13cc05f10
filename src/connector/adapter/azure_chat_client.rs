use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{Completion, DomainError, GenerationParams};

pub const DEFAULT_OPENAI_API_VERSION: &str = "2023-05-15";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize)]
struct ApiRequest<'a> {
    messages: Vec<ApiMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Deserialize)]
struct ApiChoiceMessage {
    content: Option<String>,
}

/// HTTP client for an Azure OpenAI chat-completion deployment.
///
/// Calls `POST {endpoint}/openai/deployments/{deployment}/chat/completions`
/// with the `api-key` header. Only the first choice is read; a response with
/// no choices, or a choice without content, yields an empty [`Completion`].
pub struct AzureChatClient {
    client: reqwest::Client,
    api_key: String,
    deployment: String,
    url: Url,
}

impl AzureChatClient {
    pub fn new(
        endpoint: &str,
        deployment: impl Into<String>,
        api_key: impl Into<String>,
        api_version: &str,
    ) -> Result<Self, DomainError> {
        let deployment = deployment.into();
        let raw = format!(
            "{}/openai/deployments/{}/chat/completions",
            endpoint.trim_end_matches('/'),
            deployment
        );
        let mut url = Url::parse(&raw)
            .map_err(|e| DomainError::config(format!("invalid OpenAI endpoint {raw}: {e}")))?;
        url.query_pairs_mut().append_pair("api-version", api_version);

        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            deployment,
            url,
        })
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
impl ChatClient for AzureChatClient {
    async fn complete(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Completion, DomainError> {
        let request = ApiRequest {
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
        };

        let response = self
            .client
            .post(self.url.clone())
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DomainError::completion(format!("AzureChatClient: request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("AzureChatClient: API returned {status}: {body}");
            return Err(DomainError::completion(format!(
                "AzureChatClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::completion(format!("AzureChatClient: failed to parse response: {e}"))
        })?;

        let text = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        debug!("AzureChatClient: {} characters generated", text.len());
        Ok(Completion::new(text))
    }

    fn model_name(&self) -> &str {
        &self.deployment
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use super::*;

    async fn fake_completions(
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        if headers.get("api-key").and_then(|v| v.to_str().ok()) != Some("openai-key") {
            return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "bad key" })));
        }

        let params_ok = body["max_tokens"] == json!(1000)
            && body["temperature"].as_f64().is_some_and(|t| (t - 0.7).abs() < 1e-6)
            && body["top_p"].as_f64().is_some_and(|p| (p - 0.5).abs() < 1e-6)
            && body["messages"][0]["role"] == json!("user");
        if !params_ok {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad params" })));
        }

        let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
        let reply = match prompt {
            "silence" => json!({ "choices": [] }),
            "null" => json!({
                "choices": [{ "message": { "role": "assistant", "content": null } }]
            }),
            other => json!({
                "choices": [{
                    "message": { "role": "assistant", "content": format!("answer to {other}") }
                }]
            }),
        };
        (StatusCode::OK, Json(reply))
    }

    async fn spawn_fake_openai() -> String {
        let app = Router::new().route(
            "/openai/deployments/gpt-test/chat/completions",
            post(fake_completions),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    fn client(base: &str, key: &str) -> AzureChatClient {
        AzureChatClient::new(base, "gpt-test", key, DEFAULT_OPENAI_API_VERSION).unwrap()
    }

    #[test]
    fn test_deployment_url() {
        let client = client("https://acme.openai.azure.com/", "k");
        assert_eq!(
            client.url(),
            "https://acme.openai.azure.com/openai/deployments/gpt-test/chat/completions?api-version=2023-05-15"
        );
        assert_eq!(client.model_name(), "gpt-test");
    }

    #[tokio::test]
    async fn test_complete_sends_fixed_parameters() {
        let base = spawn_fake_openai().await;
        let completion = client(&base, "openai-key")
            .complete("hi", &GenerationParams::default())
            .await
            .unwrap();

        assert_eq!(completion.text(), "answer to hi");
    }

    #[tokio::test]
    async fn test_missing_content_is_empty_completion() {
        let base = spawn_fake_openai().await;
        let client = client(&base, "openai-key");

        let none = client
            .complete("silence", &GenerationParams::default())
            .await
            .unwrap();
        let null = client
            .complete("null", &GenerationParams::default())
            .await
            .unwrap();

        assert!(none.is_empty());
        assert!(null.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_is_completion_error() {
        let base = spawn_fake_openai().await;
        let result = client(&base, "wrong")
            .complete("hi", &GenerationParams::default())
            .await;

        assert!(matches!(result, Err(DomainError::CompletionError(_))));
    }
}

// OpenAI Assistants client (HTTP direct, no SDK)

use crate::config::OpenAIConfig;
use crate::error::{LlmError, Result};
use crate::traits::AssistantsClient;
use crate::types::{CreateMessageRequest, CreateRunRequest, MessageList, Run, Thread, ThreadMessage};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub struct OpenAIAssistantsClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl OpenAIAssistantsClient {
    /// Create a client against the public API with default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(OpenAIConfig::new(api_key))
    }

    pub fn from_config(config: OpenAIConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .map_err(|_| LlmError::InvalidConfig("Invalid API key format".to_string()))?,
        );
        headers.insert(
            HeaderName::from_static("openai-beta"),
            HeaderValue::from_str(&config.beta_header)
                .map_err(|_| LlmError::InvalidConfig("Invalid OpenAI-Beta header".to_string()))?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| LlmError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn an API response into `T`, or into `LlmError::Api` carrying the
    /// upstream status and body
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));
            tracing::debug!(status = %status, "Assistants API returned an error");
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl AssistantsClient for OpenAIAssistantsClient {
    async fn create_thread(&self) -> Result<Thread> {
        let response = self
            .http_client
            .post(self.url("/threads"))
            .json(&serde_json::json!({}))
            .send()
            .await?;

        Self::handle_response(response).await
    }

    async fn create_message(
        &self,
        thread_id: &str,
        request: CreateMessageRequest,
    ) -> Result<ThreadMessage> {
        let response = self
            .http_client
            .post(self.url(&format!("/threads/{}/messages", thread_id)))
            .json(&request)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run> {
        let response = self
            .http_client
            .post(self.url(&format!("/threads/{}/runs", thread_id)))
            .json(&CreateRunRequest::new(assistant_id))
            .send()
            .await?;

        Self::handle_response(response).await
    }

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        let response = self
            .http_client
            .get(self.url(&format!("/threads/{}/runs/{}", thread_id, run_id)))
            .send()
            .await?;

        Self::handle_response(response).await
    }

    async fn list_messages(&self, thread_id: &str) -> Result<MessageList> {
        let response = self
            .http_client
            .get(self.url(&format!("/threads/{}/messages", thread_id)))
            .send()
            .await?;

        Self::handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OpenAIAssistantsClient::new("sk-test");
        assert!(client.is_ok());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = OpenAIConfig::new("sk-test").with_base_url("http://localhost:8080/v1/");
        let client = OpenAIAssistantsClient::from_config(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
        assert_eq!(client.url("/threads"), "http://localhost:8080/v1/threads");
    }

    #[test]
    fn test_invalid_api_key_is_rejected() {
        let result = OpenAIAssistantsClient::new("sk-bad\nkey");
        assert!(matches!(result, Err(LlmError::InvalidConfig(_))));
    }
}

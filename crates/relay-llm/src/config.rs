use serde::{Deserialize, Serialize};

pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Protocol version sent in the `OpenAI-Beta` header.
pub const ASSISTANTS_BETA: &str = "assistants=v2";

/// Connection settings for the Assistants API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    pub api_key: String,
    /// Base URL, defaults to https://api.openai.com/v1
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_beta_header")]
    pub beta_header: String,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            beta_header: default_beta_header(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_beta_header(mut self, beta_header: impl Into<String>) -> Self {
        self.beta_header = beta_header.into();
        self
    }
}

fn default_base_url() -> String {
    OPENAI_API_BASE.to_string()
}

fn default_beta_header() -> String {
    ASSISTANTS_BETA.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OpenAIConfig::new("sk-test");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.beta_header, "assistants=v2");
    }

    #[test]
    fn test_builder_overrides() {
        let config = OpenAIConfig::new("sk-test")
            .with_base_url("http://localhost:9999/v1")
            .with_beta_header("assistants=v1");

        assert_eq!(config.base_url, "http://localhost:9999/v1");
        assert_eq!(config.beta_header, "assistants=v1");
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: OpenAIConfig = serde_json::from_str(r#"{"api_key":"sk-test"}"#).unwrap();
        assert_eq!(config.base_url, OPENAI_API_BASE);
        assert_eq!(config.beta_header, ASSISTANTS_BETA);
    }
}

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use relay_bridge::BridgeConfig;
use relay_llm::OpenAIConfig;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    #[serde(default)]
    pub openai_api_key: String,
    #[serde(default)]
    pub openai_assistant_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Hard ceiling for a whole HTTP request, answered with 504 when exceeded
    #[serde(default = "default_server_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_server_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_origins")]
    pub origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            origins: default_origins(),
        }
    }
}

/// Upstream assistant service and workflow timings
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_beta_header")]
    pub beta_header: String,
    /// Deadline for each outbound call
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            beta_header: default_beta_header(),
            request_timeout_ms: default_request_timeout_ms(),
            poll_interval_ms: default_poll_interval_ms(),
            max_poll_attempts: default_max_poll_attempts(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. Environment variables: `RELAY_<SECTION>__<KEY>`, e.g. `RELAY_SERVER__PORT`
    ///
    /// `OPENAI_API_KEY` and `OPENAI_ASSISTANT_ID` are read from the
    /// environment only and are required.
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("RELAY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut cfg: Config = builder.build()?.try_deserialize()?;

        cfg.openai_api_key = require_secret("OPENAI_API_KEY", std::env::var("OPENAI_API_KEY").ok())?;
        cfg.openai_assistant_id =
            require_secret("OPENAI_ASSISTANT_ID", std::env::var("OPENAI_ASSISTANT_ID").ok())?;

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// True once both secrets are present
    pub fn has_credentials(&self) -> bool {
        !self.openai_api_key.is_empty() && !self.openai_assistant_id.is_empty()
    }

    pub fn openai_config(&self) -> OpenAIConfig {
        OpenAIConfig::new(self.openai_api_key.clone())
            .with_base_url(self.assistant.base_url.clone())
            .with_beta_header(self.assistant.beta_header.clone())
    }

    pub fn bridge_config(&self) -> BridgeConfig {
        BridgeConfig::new(self.openai_assistant_id.clone())
            .request_timeout(Duration::from_millis(self.assistant.request_timeout_ms))
            .poll_interval(Duration::from_millis(self.assistant.poll_interval_ms))
            .max_poll_attempts(self.assistant.max_poll_attempts)
    }
}

fn require_secret(name: &str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Message(format!(
            "{} environment variable is required",
            name
        ))),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_server_timeout() -> u64 {
    90
}

fn default_true() -> bool {
    true
}

fn default_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_base_url() -> String {
    relay_llm::config::OPENAI_API_BASE.to_string()
}

fn default_beta_header() -> String {
    relay_llm::config::ASSISTANTS_BETA.to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_poll_interval_ms() -> u64 {
    2_000
}

fn default_max_poll_attempts() -> u32 {
    15
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

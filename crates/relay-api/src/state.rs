use crate::config::Config;
use relay_bridge::AssistantBridge;
use relay_llm::{AssistantsClient, OpenAIAssistantsClient};
use std::sync::Arc;

/// Shared application state passed to all handlers
///
/// Built once at startup. The bridge owns the HTTP connection pool to the
/// assistant service and is shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub bridge: Arc<AssistantBridge>,
}

impl AppState {
    pub fn new(config: Config, bridge: AssistantBridge) -> Self {
        Self {
            config: Arc::new(config),
            bridge: Arc::new(bridge),
        }
    }

    /// Wire the OpenAI client and the bridge from configuration
    pub fn from_config(config: Config) -> relay_llm::Result<Self> {
        let client: Arc<dyn AssistantsClient> =
            Arc::new(OpenAIAssistantsClient::from_config(config.openai_config())?);
        let bridge = AssistantBridge::new(client, config.bridge_config());

        Ok(Self::new(config, bridge))
    }
}

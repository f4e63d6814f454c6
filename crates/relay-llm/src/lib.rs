pub mod config;
pub mod error;
pub mod openai;
pub mod traits;
pub mod types;

pub use config::OpenAIConfig;
pub use error::{LlmError, Result};
pub use openai::OpenAIAssistantsClient;
pub use traits::AssistantsClient;
pub use types::{
    CreateMessageRequest, CreateRunRequest, MessageList, MessageRole, Run, RunStatus, Thread,
    ThreadMessage,
};

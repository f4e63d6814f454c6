use crate::error::Result;
use crate::types::{CreateMessageRequest, MessageList, Run, Thread, ThreadMessage};
use async_trait::async_trait;

/// Operations of the Assistants API that the bridge consumes
///
/// Implementations must return `LlmError::Api` for non-success responses so
/// callers can relay the upstream status and body unchanged.
#[async_trait]
pub trait AssistantsClient: Send + Sync {
    /// Create an empty conversation thread
    async fn create_thread(&self) -> Result<Thread>;

    /// Append a message to a thread
    async fn create_message(
        &self,
        thread_id: &str,
        request: CreateMessageRequest,
    ) -> Result<ThreadMessage>;

    /// Start a run of `assistant_id` against a thread
    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run>;

    /// Fetch the current state of a run
    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run>;

    /// List the messages of a thread, newest first
    async fn list_messages(&self, thread_id: &str) -> Result<MessageList>;
}

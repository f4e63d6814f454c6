use crate::config::BridgeConfig;
use crate::error::BridgeError;
use relay_llm::{AssistantsClient, CreateMessageRequest, RunStatus};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

pub type Result<T> = std::result::Result<T, BridgeError>;

/// Reply produced by one pass through the workflow
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    pub thread_id: String,
    pub run_id: String,
    pub message_id: String,
    /// Raw content parts of the assistant message
    pub content: Value,
}

/// Relays one user message to an assistant and waits for its answer
///
/// Every call to [`AssistantBridge::reply`] creates a fresh thread and a
/// fresh run. Nothing is cached or cleaned up between calls.
pub struct AssistantBridge {
    client: Arc<dyn AssistantsClient>,
    config: BridgeConfig,
}

impl AssistantBridge {
    pub fn new(client: Arc<dyn AssistantsClient>, config: BridgeConfig) -> Self {
        Self { client, config }
    }

    /// Create thread, add `message`, run the assistant, poll until the run
    /// settles, then return the first assistant message of the thread
    pub async fn reply(&self, message: Value) -> Result<AssistantReply> {
        let start = Instant::now();

        tracing::info!("Creating a new thread");
        let thread = self
            .call("create_thread", self.client.create_thread())
            .await?;
        tracing::info!(thread_id = %thread.id, "Thread created");

        tracing::info!(thread_id = %thread.id, "Adding user message");
        self.call(
            "create_message",
            self.client
                .create_message(&thread.id, CreateMessageRequest::user(message)),
        )
        .await?;

        tracing::info!(thread_id = %thread.id, "Starting assistant run");
        let run = self
            .call(
                "create_run",
                self.client.create_run(&thread.id, &self.config.assistant_id),
            )
            .await?;
        tracing::info!(thread_id = %thread.id, run_id = %run.id, "Run started");

        let status = self.wait_for_run(&thread.id, &run.id).await?;
        if status != RunStatus::Completed {
            tracing::warn!(
                thread_id = %thread.id,
                run_id = %run.id,
                status = %status,
                "Run settled without completing"
            );
        }

        tracing::info!(thread_id = %thread.id, "Fetching thread messages");
        let messages = self
            .call("list_messages", self.client.list_messages(&thread.id))
            .await?;

        let reply = match messages.first_assistant() {
            Some(message) if !message.is_empty() => message,
            _ => {
                tracing::error!(thread_id = %thread.id, "No assistant reply in thread");
                return Err(BridgeError::NoReply);
            }
        };

        tracing::info!(
            thread_id = %thread.id,
            run_id = %run.id,
            message_id = %reply.id,
            duration_ms = %start.elapsed().as_millis(),
            "Assistant reply received"
        );

        Ok(AssistantReply {
            thread_id: thread.id,
            run_id: run.id,
            message_id: reply.id.clone(),
            content: reply.content.clone(),
        })
    }

    /// Poll the run every `poll_interval` until it leaves the in-flight set
    ///
    /// The status reported by `create_run` is not trusted: at least one
    /// check is always made, after the first delay.
    async fn wait_for_run(&self, thread_id: &str, run_id: &str) -> Result<RunStatus> {
        tracing::info!(thread_id, run_id, "Waiting for the assistant");

        let mut status = RunStatus::InProgress;
        let mut attempts = 0;

        while status.is_in_flight() {
            if attempts >= self.config.max_poll_attempts {
                tracing::error!(thread_id, run_id, attempts, "Run still in flight, giving up");
                return Err(BridgeError::PollExhausted { attempts });
            }

            tokio::time::sleep(self.config.poll_interval).await;
            attempts += 1;

            let run = self
                .call("retrieve_run", self.client.retrieve_run(thread_id, run_id))
                .await?;
            status = run.status;
            tracing::debug!(thread_id, run_id, attempt = attempts, status = %status, "Run status");
        }

        tracing::info!(thread_id, run_id, status = %status, attempts, "Run settled");
        Ok(status)
    }

    /// Await one outbound call under the request deadline
    async fn call<T, F>(&self, step: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = relay_llm::Result<T>>,
    {
        match tokio::time::timeout(self.config.request_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::error!(step, error = %e, "Assistants API call failed");
                Err(e.into())
            }
            Err(_) => {
                tracing::error!(
                    step,
                    timeout_ms = %self.config.request_timeout.as_millis(),
                    "Assistants API call timed out"
                );
                Err(BridgeError::Timeout)
            }
        }
    }
}

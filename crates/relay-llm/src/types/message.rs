use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    #[serde(other)]
    Other,
}

/// A message stored in a thread
///
/// `content` is kept as the raw JSON the API returned (an array of content
/// parts such as `{"type": "text", "text": {"value": ...}}`) so it can be
/// relayed to callers without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadMessage {
    pub id: String,
    pub role: MessageRole,
    #[serde(default)]
    pub content: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

impl ThreadMessage {
    /// True when the content is null, an empty array or an empty string
    pub fn is_empty(&self) -> bool {
        match &self.content {
            Value::Null => true,
            Value::Array(parts) => parts.is_empty(),
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }
}

/// Body of `POST /threads/{thread_id}/messages`
#[derive(Debug, Clone, Serialize)]
pub struct CreateMessageRequest {
    pub role: MessageRole,
    pub content: Value,
}

impl CreateMessageRequest {
    /// A user message. `content` may be a plain string or an array of parts.
    pub fn user(content: impl Into<Value>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Page returned by `GET /threads/{thread_id}/messages`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageList {
    pub data: Vec<ThreadMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_id: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

impl MessageList {
    /// First message authored by the assistant, in list order
    pub fn first_assistant(&self) -> Option<&ThreadMessage> {
        self.data.iter().find(|m| m.role == MessageRole::Assistant)
    }
}

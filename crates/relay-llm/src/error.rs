use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    /// The API answered with a non-success status. `body` is the response
    /// body as JSON, or a JSON string when the body was not JSON.
    #[error("Assistants API error ({status}): {body}")]
    Api { status: u16, body: Value },

    #[error("Request to the Assistants API timed out")]
    Timeout,

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Http(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, LlmError>;

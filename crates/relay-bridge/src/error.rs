use http::StatusCode;
use relay_llm::LlmError;
use serde_json::{json, Value};
use thiserror::Error;

pub const TIMEOUT_MESSAGE: &str = "Tiempo de espera agotado. Inténtalo de nuevo más tarde.";
pub const POLL_TIMEOUT_MESSAGE: &str =
    "El asistente está tardando demasiado. Inténtalo de nuevo en unos segundos.";
pub const NO_REPLY_MESSAGE: &str = "El asistente no proporcionó una respuesta válida.";
pub const UNEXPECTED_MESSAGE: &str = "Error en la solicitud a OpenAI";

#[derive(Debug, Error)]
pub enum BridgeError {
    /// Non-success answer from the assistant service, relayed as-is
    #[error("Assistants API returned {status}: {body}")]
    Upstream { status: StatusCode, body: Value },

    #[error("External call exceeded the request deadline")]
    Timeout,

    #[error("Run still in flight after {attempts} status checks")]
    PollExhausted { attempts: u32 },

    #[error("Assistant produced no usable reply")]
    NoReply,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl BridgeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BridgeError::Upstream { status, .. } => *status,
            BridgeError::Timeout | BridgeError::PollExhausted { .. } => {
                StatusCode::GATEWAY_TIMEOUT
            }
            BridgeError::NoReply | BridgeError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// JSON body returned to the caller: `{"error": ...}`
    pub fn payload(&self) -> Value {
        let detail = match self {
            BridgeError::Upstream { body, .. } => body.clone(),
            BridgeError::Timeout => json!(TIMEOUT_MESSAGE),
            BridgeError::PollExhausted { .. } => json!(POLL_TIMEOUT_MESSAGE),
            BridgeError::NoReply => json!(NO_REPLY_MESSAGE),
            BridgeError::Unexpected(_) => json!(UNEXPECTED_MESSAGE),
        };

        json!({ "error": detail })
    }
}

impl From<LlmError> for BridgeError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api { status, body } => BridgeError::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                body,
            },
            LlmError::Timeout => BridgeError::Timeout,
            other => BridgeError::Unexpected(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_is_mirrored() {
        let body = json!({"error": {"message": "No thread found", "type": "invalid_request_error"}});
        let err = BridgeError::from(LlmError::Api {
            status: 404,
            body: body.clone(),
        });

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.payload(), json!({ "error": body }));
    }

    #[test]
    fn test_timeouts_are_gateway_timeouts_with_distinct_messages() {
        assert_eq!(BridgeError::Timeout.status_code(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            BridgeError::PollExhausted { attempts: 15 }.status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_ne!(
            BridgeError::Timeout.payload(),
            BridgeError::PollExhausted { attempts: 15 }.payload()
        );
        assert_eq!(BridgeError::from(LlmError::Timeout).payload(), json!({"error": TIMEOUT_MESSAGE}));
    }

    #[test]
    fn test_no_reply() {
        let err = BridgeError::NoReply;
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.payload(), json!({"error": NO_REPLY_MESSAGE}));
    }

    #[test]
    fn test_unexpected_hides_cause() {
        let err = BridgeError::from(LlmError::InvalidConfig("bad header".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.payload(), json!({"error": UNEXPECTED_MESSAGE}));
        assert!(err.to_string().contains("bad header"));
    }
}

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use relay_bridge::BridgeError;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// A message, or the upstream error body relayed verbatim
    #[schema(value_type = Object)]
    pub error: Value,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "POST")],
                Json(ErrorResponse {
                    error: json!(self.to_string()),
                }),
            )
                .into_response(),
            ApiError::BadRequest(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: json!(self.to_string()),
                }),
            )
                .into_response(),
            ApiError::Bridge(ref e) => {
                match e {
                    BridgeError::Upstream { status, .. } => {
                        tracing::error!(status = %status, "Relaying upstream error")
                    }
                    BridgeError::Unexpected(cause) => {
                        tracing::error!(cause = %cause, "Unexpected failure talking to the assistant")
                    }
                    other => tracing::error!("Bridge error: {}", other),
                }

                (e.status_code(), Json(e.payload())).into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_not_allowed_sets_allow_header() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");
    }

    #[test]
    fn test_bad_request() {
        let response = ApiError::BadRequest("missing field `message`".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bridge_errors_keep_their_status() {
        let cases = [
            (
                BridgeError::Upstream {
                    status: StatusCode::TOO_MANY_REQUESTS,
                    body: json!({"error": {"message": "Rate limit"}}),
                },
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (BridgeError::Timeout, StatusCode::GATEWAY_TIMEOUT),
            (
                BridgeError::PollExhausted { attempts: 15 },
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (BridgeError::NoReply, StatusCode::INTERNAL_SERVER_ERROR),
            (
                BridgeError::Unexpected("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), expected);
        }
    }
}

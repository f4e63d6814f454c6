use axum::{
    body::Bytes,
    extract::State,
    http::Method,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{
    error::{ApiError, ApiResult, ErrorResponse},
    state::AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// Text for the assistant. Passed through untouched, so an array of
    /// content parts is accepted as well.
    #[schema(value_type = String, example = "¿Cuál es el horario de atención?")]
    pub message: Value,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    /// Content parts of the assistant's reply
    #[schema(value_type = Object)]
    pub response: Value,
}

/// Relay a message to the assistant and return its reply
///
/// Registered for every method so non-POST requests get a JSON 405.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponse),
        (status = 400, description = "Body is not JSON or lacks `message`", body = ErrorResponse),
        (status = 405, description = "Only POST is accepted", body = ErrorResponse),
        (status = 500, description = "No usable reply or unexpected failure", body = ErrorResponse),
        (status = 504, description = "Assistant service too slow", body = ErrorResponse)
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> ApiResult<Json<ChatResponse>> {
    if method != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let request: ChatRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let reply = state.bridge.reply(request.message).await?;

    Ok(Json(ChatResponse {
        response: reply.content,
    }))
}

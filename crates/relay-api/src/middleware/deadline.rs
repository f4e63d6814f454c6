use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use relay_bridge::BridgeError;
use std::{sync::Arc, time::Duration};

use crate::{error::ApiError, state::AppState};

/// Caps a whole request at `server.request_timeout_secs`
///
/// An overrun is answered like an outbound call that missed its deadline:
/// 504 with the JSON timeout message.
pub async fn enforce_deadline(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let limit = Duration::from_secs(state.config.server.request_timeout_secs);

    match tokio::time::timeout(limit, next.run(req)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::error!(timeout_secs = limit.as_secs(), "Request deadline exceeded");
            ApiError::Bridge(BridgeError::Timeout).into_response()
        }
    }
}

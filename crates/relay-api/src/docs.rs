use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::routes::{chat, health};

#[derive(OpenApi)]
#[openapi(
    paths(chat::chat, health::health_check),
    components(schemas(
        chat::ChatRequest,
        chat::ChatResponse,
        health::HealthResponse,
        ErrorResponse
    )),
    tags(
        (name = "chat", description = "Relay messages to the assistant"),
        (name = "health", description = "Service status")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/chat"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}

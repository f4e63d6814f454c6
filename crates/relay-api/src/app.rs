use axum::{
    middleware,
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::Config,
    docs::ApiDoc,
    middleware::{deadline, logging},
    routes::{chat, health},
    state::AppState,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/chat", any(chat::chat));

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            deadline::enforce_deadline,
        ))
        .layer(middleware::from_fn(logging::log_request))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    if !config.cors.enabled {
        return CorsLayer::new();
    }

    let cors = CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any);

    if config.cors.origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let parsed_origins: Vec<axum::http::HeaderValue> = config
            .cors
            .origins
            .iter()
            .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
            .collect();

        cors.allow_origin(parsed_origins)
    }
}

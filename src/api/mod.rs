//! HTTP surface of the proxy: router, shared state, and error mapping.

pub mod error;
pub mod handlers;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::models::ProxyConfig;

/// Inline images arrive base64-encoded in the JSON body, so the default
/// 2 MiB extractor limit is too small.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Shared application state passed to all handlers.
///
/// Holds only read-only configuration and a reusable HTTP client; nothing
/// here mutates between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: ProxyConfig,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: ProxyConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

/// Builds the axum router with the chat route and shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(handlers::chat_handler))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

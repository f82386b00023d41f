//! Chat proxy handler.

use axum::extract::State;
use axum::Json;
use tracing::error;

use crate::api::error::{classify_upstream, ApiError};
use crate::api::AppState;
use crate::gemini::{GeminiChatSession, GeminiHttpClient};
use crate::models::{ChatRequest, ChatResponse};
use crate::prompts;

/// `POST /api/chat` — forward one chat turn to Gemini and relay the reply.
///
/// The API key is read fresh from the environment on every request and is
/// checked before the body is validated, so a missing key reports
/// `API_KEY_NOT_CONFIGURED` for any body.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let api_key = state.config.api_key().ok_or(ApiError::ApiKeyNotConfigured)?;

    if body.is_empty() {
        return Err(ApiError::EmptyMessage);
    }

    let http =
        GeminiHttpClient::new_with_client(api_key, state.config.model.clone(), state.http.clone())
            .with_base_url(state.config.gemini_base_url.clone());
    let session = GeminiChatSession::new(http, prompts::PERSONA, &body.history);

    let result = if let Some(image) = &body.image_data {
        let caption = body
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(prompts::DESCRIBE_IMAGE);
        session.send_message_with_image(image, caption).await
    } else {
        // is_empty() guarantees a non-empty message on this branch.
        let message = body.message.as_deref().unwrap_or_default();
        session.send_message(message).await
    };

    match result {
        Ok(reply) => Ok(Json(ChatResponse { reply })),
        Err(err) => {
            error!("Gemini API error: {err}");
            Err(classify_upstream(&err.to_string()))
        }
    }
}

/// Fallback for non-POST methods on registered routes.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

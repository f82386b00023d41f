//! Data models and structures
//!
//! Defines the wire types of the chat proxy endpoint and the runtime
//! configuration read from the environment.

use serde::{Deserialize, Serialize};

/// Role of a conversation turn, mirroring the Gemini chat roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One text fragment of a conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnPart {
    pub text: String,
}

/// One element of the linear, ordered conversation history supplied by the
/// caller. Turns are passed through to Gemini unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub parts: Vec<TurnPart>,
}

/// Base64 image payload attached to a chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub data: String,
    pub mime_type: String,
}

/// Inbound body of `POST /api/chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    #[serde(default)]
    pub image_data: Option<ImagePayload>,
}

impl ChatRequest {
    /// A request is empty when it carries neither message text nor an image.
    pub fn is_empty(&self) -> bool {
        let no_text = self.message.as_deref().is_none_or(|m| m.is_empty());
        no_text && self.image_data.is_none()
    }
}

/// Successful proxy response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Failure proxy response. `code` is absent on validation and 405 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Runtime configuration for the proxy server.
///
/// The Gemini API key is deliberately not a field here: the handler reads it
/// from the environment on every request, so a key rotated in the environment
/// takes effect without a restart.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Address to bind the HTTP listener.
    pub bind_addr: String,
    /// Gemini model ID.
    pub model: String,
    /// Base URL of the Generative Language API.
    pub gemini_base_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_var: String,
}

impl ProxyConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| crate::gemini::DEFAULT_BASE_URL.to_string()),
            api_key_var: "GEMINI_API_KEY".to_string(),
        }
    }

    /// Reads the API key fresh from the environment. Empty values count as
    /// unconfigured.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_var)
            .ok()
            .filter(|key| !key.is_empty())
    }
}

//! Client dispatcher for the proxy endpoint.

use reqwest::Client;
use serde_json::json;

use crate::models::{ChatResponse, ErrorBody};
use crate::{Error, Result};

/// Generic failure message used when the server reports no usable error body.
const FALLBACK_ERROR: &str = "Terjadi kesalahan pada server";

/// Posts chat messages to a running proxy and unwraps the JSON response.
pub struct ChatDispatcher {
    http: Client,
    endpoint: String,
}

impl ChatDispatcher {
    /// `endpoint` is the full URL of the chat route, for example
    /// `http://127.0.0.1:8080/api/chat`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Sends one text message and returns the generated reply.
    ///
    /// Any non-2xx status surfaces as [`Error::Server`] carrying the
    /// server-reported `error` string. No retry, no local classification.
    pub async fn send_message(&self, message: &str) -> Result<String> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "message": message }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .map(|b| b.error)
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| FALLBACK_ERROR.to_string());
            return Err(Error::Server(message));
        }

        let reply: ChatResponse = serde_json::from_str(&body)?;
        Ok(reply.reply)
    }
}

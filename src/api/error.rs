//! Caller-facing error taxonomy with HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ErrorBody;

/// Errors surfaced to proxy callers. Each variant carries a fixed status
/// code, an Indonesian product string, and an optional machine-readable code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Pesan tidak boleh kosong")]
    EmptyMessage,

    #[error("API Key belum dikonfigurasi. Silakan hubungi administrator.")]
    ApiKeyNotConfigured,

    #[error("API Key tidak valid atau sudah expired")]
    ApiKeyInvalid,

    #[error("Kuota API telah habis. Silakan coba lagi nanti.")]
    QuotaExceeded,

    #[error("Terjadi kesalahan pada server")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::EmptyMessage => StatusCode::BAD_REQUEST,
            ApiError::ApiKeyNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ApiKeyInvalid => StatusCode::UNAUTHORIZED,
            ApiError::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable code; absent on validation and 405 responses.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            ApiError::MethodNotAllowed | ApiError::EmptyMessage => None,
            ApiError::ApiKeyNotConfigured => Some("API_KEY_NOT_CONFIGURED"),
            ApiError::ApiKeyInvalid => Some("API_KEY_INVALID"),
            ApiError::QuotaExceeded => Some("QUOTA_EXCEEDED"),
            ApiError::Internal => Some("INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.to_string(),
            code: self.code().map(str::to_string),
        });
        (self.status(), body).into_response()
    }
}

/// Maps an upstream Gemini failure onto the caller-facing taxonomy by
/// substring inspection, in fixed precedence order.
///
/// Matching is case-sensitive. The upstream library does not guarantee
/// stable error strings, so unrecognized messages fall through to
/// [`ApiError::Internal`]; only the resulting status codes are contractual.
pub fn classify_upstream(message: &str) -> ApiError {
    if message.contains("API key") || message.contains("invalid") {
        ApiError::ApiKeyInvalid
    } else if message.contains("quota") {
        ApiError::QuotaExceeded
    } else {
        ApiError::Internal
    }
}

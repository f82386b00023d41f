//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Gemini API error: {0}")]
    AiProvider(String),

    /// Error text reported by the proxy server, surfaced verbatim by the
    /// client dispatcher.
    #[error("{0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, Error>;

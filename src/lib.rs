//! Backend proxy for the Golem AI chat assistant
//!
//! Forwards user chat turns (text and optional inline images) to Google's
//! Generative Language API with a fixed persona prompt injected, and relays
//! the generated reply as normalized JSON. Also ships the client dispatcher
//! used by frontends to call the proxy.

pub mod api;
pub mod client;
pub mod error;
pub mod gemini;
pub mod models;
pub mod prompts;

pub use error::{Error, Result};

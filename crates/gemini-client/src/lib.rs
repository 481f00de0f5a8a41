//! # Gemini API client
//!
//! Thin reqwest-based client for the Gemini `generateContent` endpoint. Callers build a
//! [`GenerationRequest`] (model, prompt strings, [`GenerationConfig`]) and get back a
//! [`GenerationResponse`] of typed parts (text or image bytes).
//!
//! Handlers depend on the [`GenerativeModel`] trait rather than [`GeminiClient`] so tests can
//! substitute a recording mock.

mod client;
mod config;
mod error;
mod types;

pub use client::{GeminiClient, DEFAULT_BASE_URL};
pub use config::{GeminiConfig, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, DEFAULT_TIMEOUT_SECS};
pub use error::{GeminiError, Result};
pub use types::{
    GenerationConfig, GenerationRequest, GenerationResponse, Modality, ResponsePart, Tool,
    UsageMetadata,
};

use async_trait::async_trait;

/// A generative model backend: one request in, one response out.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Runs one content-generation call. Errors are transport, HTTP status or response-shape failures.
    async fn generate_content(&self, request: &GenerationRequest) -> Result<GenerationResponse>;
}

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        "***".to_string()
    } else {
        let head: String = chars[..7].iter().collect();
        let tail: String = chars[len - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}

//! Errors returned by the Gemini client.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeminiError {
    /// Connection, TLS, timeout or body-read failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status; `message` is the API's error message when it could be parsed.
    #[error("Gemini API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse Gemini response: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, GeminiError>;

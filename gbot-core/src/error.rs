//! Error types for the bot core.

use thiserror::Error;

/// Top-level error for gbot: outbound transport failures and AI backend failures.
#[derive(Error, Debug)]
pub enum GbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for core operations; uses [`GbotError`].
pub type Result<T> = std::result::Result<T, GbotError>;

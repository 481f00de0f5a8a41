//! Gemini configuration loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

use crate::client::DEFAULT_BASE_URL;

/// Model used for question answering and translation.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";
/// Model used for image generation (text + image output).
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-exp-image-generation";
/// HTTP timeout per backend call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Gemini API settings.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Builds config with the given key; everything else at defaults.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Loads from env: GEMINI_API_KEY required; GEMINI_BASE_URL, GEMINI_TEXT_MODEL,
    /// GEMINI_IMAGE_MODEL, GEMINI_TIMEOUT_SECS optional.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .context("GEMINI_API_KEY not set")?;
        let base_url =
            env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let text_model =
            env::var("GEMINI_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string());
        let image_model =
            env::var("GEMINI_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());
        let timeout_secs = match env::var("GEMINI_TIMEOUT_SECS") {
            Ok(s) => s
                .parse()
                .with_context(|| format!("GEMINI_TIMEOUT_SECS is not a number: {}", s))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            base_url,
            text_model,
            image_model,
            timeout_secs,
        })
    }

    /// Checks that the base URL parses and the timeout is non-zero.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.base_url).is_err() {
            anyhow::bail!("GEMINI_BASE_URL is not a valid URL: {}", self.base_url);
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("GEMINI_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }
}

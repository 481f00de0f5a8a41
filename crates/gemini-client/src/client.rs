//! reqwest implementation of [`GenerativeModel`] against the Gemini REST API.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::config::GeminiConfig;
use crate::error::{GeminiError, Result};
use crate::types::{GenerationRequest, GenerationResponse};
use crate::{mask_token, GenerativeModel};

/// Public Gemini API base (v1beta carries search grounding and image output).
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini client. Cheap to clone; the underlying reqwest client is reference-counted.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Builds a client for the public API with reqwest defaults.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Builds a client with a custom base URL (e.g. a proxy or a mock server).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds a client from config, applying the configured request timeout.
    pub fn from_config(config: &GeminiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn generate_content(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        info!(
            prompt_count = request.contents.len(),
            prompt_preview = %request.prompt().chars().take(100).collect::<String>(),
            tools = ?request.config.tools,
            max_output_tokens = ?request.config.max_output_tokens,
            temperature = ?request.config.temperature,
            modalities = ?request.config.response_modalities,
            api_key = %mask_token(&self.api_key),
            "Gemini generate_content request"
        );

        let body = request.to_body()?;
        debug!(request_json = %body, "Gemini generate_content request JSON");

        let resp = self
            .http
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            let message = api_error_message(&text);
            warn!(status = status.as_u16(), message = %message, "Gemini API error");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response = GenerationResponse::from_json(&text)?;

        if let Some(u) = response.usage {
            info!(
                prompt_tokens = u.prompt_token_count,
                completion_tokens = u.candidates_token_count,
                total_tokens = u.total_token_count,
                "Gemini generate_content usage"
            );
        }
        info!(
            part_count = response.parts.len(),
            finish_reason = ?response.finish_reason,
            "Gemini generate_content completed"
        );

        Ok(response)
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Extracts `error.message` from a Google API error body; falls back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::with_base_url("k".to_string(), "http://host/v1beta/".to_string());
        assert_eq!(
            client.endpoint("gemini-2.0-flash"),
            "http://host/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_api_error_message_parses_google_error() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(api_error_message(body), "API key not valid.");
        assert_eq!(api_error_message("upstream down"), "upstream down");
    }
}

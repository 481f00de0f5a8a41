//! Request/response types: the public [`GenerationRequest`] / [`GenerationResponse`] model and the
//! private camelCase wire structs exchanged with `generateContent`.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::error::{GeminiError, Result};

/// Backend capability enabled for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Grounds generation in live Google Search results.
    GoogleSearch,
}

/// Output modality requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Modality {
    Text,
    Image,
}

/// Configuration bag for one call. Unset values are omitted from the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationConfig {
    pub tools: Vec<Tool>,
    pub max_output_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub response_modalities: Vec<Modality>,
}

impl GenerationConfig {
    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_response_modalities(mut self, modalities: Vec<Modality>) -> Self {
        self.response_modalities = modalities;
        self
    }
}

/// One generation call: model id, prompt strings (sent as parts of a single user turn) and config.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub contents: Vec<String>,
    pub config: GenerationConfig,
}

impl GenerationRequest {
    /// Single-prompt request with default config.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            contents: vec![prompt.into()],
            config: GenerationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// First prompt string; empty if none.
    pub fn prompt(&self) -> &str {
        self.contents.first().map(String::as_str).unwrap_or("")
    }

    /// Serializes to the `generateContent` JSON body.
    pub fn to_body(&self) -> Result<serde_json::Value> {
        let body = RequestBody {
            contents: vec![WireContent {
                role: "user",
                parts: self
                    .contents
                    .iter()
                    .map(|text| WireTextPart { text: text.as_str() })
                    .collect(),
            }],
            tools: self.config.tools.iter().map(WireTool::from).collect(),
            generation_config: WireGenerationConfig::from_config(&self.config),
        };
        serde_json::to_value(body).map_err(|e| GeminiError::Parse(e.to_string()))
    }
}

/// One part of a model response, in the order the backend returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePart {
    Text(String),
    /// Raw image bytes as supplied by the backend (transport base64 already decoded).
    Image { mime_type: String, data: Vec<u8> },
}

/// Token accounting reported by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

/// Parsed response: parts of the first candidate plus metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationResponse {
    pub parts: Vec<ResponsePart>,
    pub finish_reason: Option<String>,
    pub usage: Option<UsageMetadata>,
}

impl GenerationResponse {
    /// Builds a response from already-typed parts.
    pub fn from_parts(parts: Vec<ResponsePart>) -> Self {
        Self {
            parts,
            ..Self::default()
        }
    }

    /// Single text-part response.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::from_parts(vec![ResponsePart::Text(text.into())])
    }

    /// Concatenation of all text parts; None when the response has no text part at all.
    pub fn text(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .parts
            .iter()
            .filter_map(|p| match p {
                ResponsePart::Text(t) => Some(t.as_str()),
                ResponsePart::Image { .. } => None,
            })
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }

    /// Parses a `generateContent` JSON body.
    pub fn from_json(body: &str) -> Result<Self> {
        let wire: ResponseBody =
            serde_json::from_str(body).map_err(|e| GeminiError::Parse(e.to_string()))?;
        wire.try_into()
    }
}

// --- wire format ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestBody<'a> {
    contents: Vec<WireContent<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<WireGenerationConfig>,
}

#[derive(Serialize)]
struct WireContent<'a> {
    role: &'static str,
    parts: Vec<WireTextPart<'a>>,
}

#[derive(Serialize)]
struct WireTextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireTool {
    #[serde(skip_serializing_if = "Option::is_none")]
    google_search: Option<serde_json::Map<String, serde_json::Value>>,
}

impl From<&Tool> for WireTool {
    fn from(tool: &Tool) -> Self {
        match tool {
            Tool::GoogleSearch => Self {
                google_search: Some(serde_json::Map::new()),
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    response_modalities: Vec<Modality>,
}

impl WireGenerationConfig {
    fn from_config(config: &GenerationConfig) -> Option<Self> {
        if config.max_output_tokens.is_none()
            && config.temperature.is_none()
            && config.response_modalities.is_empty()
        {
            return None;
        }
        Some(Self {
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
            response_modalities: config.response_modalities.clone(),
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseBody {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCandidate {
    content: Option<WireResponseContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct WireResponseContent {
    #[serde(default)]
    parts: Vec<WireResponsePart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResponsePart {
    text: Option<String>,
    inline_data: Option<WireBlob>,
    #[serde(default)]
    thought: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBlob {
    #[serde(default)]
    mime_type: String,
    data: String,
}

impl TryFrom<ResponseBody> for GenerationResponse {
    type Error = GeminiError;

    fn try_from(body: ResponseBody) -> Result<Self> {
        let candidate = body.candidates.into_iter().next();
        let finish_reason = candidate.as_ref().and_then(|c| c.finish_reason.clone());
        let wire_parts = candidate
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default();

        let mut parts = Vec::with_capacity(wire_parts.len());
        for part in wire_parts {
            if part.thought {
                continue;
            }
            if let Some(text) = part.text.filter(|t| !t.is_empty()) {
                parts.push(ResponsePart::Text(text));
            } else if let Some(blob) = part.inline_data {
                let data = STANDARD
                    .decode(blob.data.as_bytes())
                    .map_err(|e| GeminiError::Parse(format!("invalid inline data: {}", e)))?;
                parts.push(ResponsePart::Image {
                    mime_type: blob.mime_type,
                    data,
                });
            }
        }

        Ok(Self {
            parts,
            finish_reason,
            usage: body.usage_metadata,
        })
    }
}

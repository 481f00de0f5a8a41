//! # gemini-handlers
//!
//! Chat command handlers backed by a [`gemini_client::GenerativeModel`]:
//! - [`AskHandler`] (`/gemini <question>`): short grounded answer.
//! - [`TranslateHandler`] (`/translate <langs> | <text>`): one grounded call per target language.
//! - [`ImageHandler`] (`/imgen <description>`): text and image parts relayed in order.
//!
//! Each handler answers `Continue` for commands it does not own, so they can sit side by side in
//! a `HandlerChain`.

mod ask;
mod image;
mod translate;

pub use ask::AskHandler;
pub use image::ImageHandler;
pub use translate::{capitalize, parse_translate_args, TranslateArgs, TranslateHandler};

use gbot_core::GbotError;
use gemini_client::{GeminiError, GenerationConfig, Tool};

/// Commands and their menu descriptions, in registration order.
pub const COMMANDS: &[(&str, &str)] = &[
    (ask::COMMAND, "Ask Gemini a question"),
    (translate::COMMAND, "Translate text: /translate Telugu, French | How are you?"),
    (image::COMMAND, "Generate an image from a description"),
];

/// Output cap for grounded text calls.
pub const MAX_OUTPUT_TOKENS: u32 = 100;
/// Sampling temperature for grounded text calls; low to favour deterministic answers.
pub const TEMPERATURE: f64 = 0.1;

/// Search-grounded, short, low-temperature config shared by `/gemini` and `/translate`.
pub fn grounded_config() -> GenerationConfig {
    GenerationConfig::default()
        .with_tool(Tool::GoogleSearch)
        .with_max_output_tokens(MAX_OUTPUT_TOKENS)
        .with_temperature(TEMPERATURE)
}

fn backend_error(e: GeminiError) -> GbotError {
    GbotError::Backend(e.to_string())
}

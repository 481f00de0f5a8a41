//! `/translate <langs> | <text>`: one grounded call per target language.

use async_trait::async_trait;
use gbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use gemini_client::{GenerationRequest, GenerativeModel};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::grounded_config;

pub(crate) const COMMAND: &str = "translate";

const MSG_USAGE: &str = "Usage: /translate Telugu | How are you?";
const MSG_TRANSLATION_FAILED: &str = "❌ Translation failed.";

/// Parsed `/translate` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateArgs {
    /// Trimmed, non-empty target languages in the order given.
    pub languages: Vec<String>,
    pub text: String,
}

/// Parses `langs | text`. None unless there is exactly one `|`, non-empty text and at least one language.
pub fn parse_translate_args(args: &str) -> Option<TranslateArgs> {
    let mut parts = args.split('|');
    let (languages, text) = match (parts.next(), parts.next(), parts.next()) {
        (Some(languages), Some(text), None) => (languages, text.trim()),
        _ => return None,
    };

    let languages: Vec<String> = languages
        .split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    if languages.is_empty() || text.is_empty() {
        return None;
    }

    Some(TranslateArgs {
        languages,
        text: text.to_string(),
    })
}

/// First character upper-cased, the rest lower-cased (`"fRENCH"` → `"French"`).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Translates text into each requested language with one backend call per language.
///
/// Calls run sequentially in the order given. A failed or empty call is reported as that
/// language's line and does not stop the remaining languages.
pub struct TranslateHandler {
    bot: Arc<dyn Bot>,
    model: Arc<dyn GenerativeModel>,
    model_id: String,
}

impl TranslateHandler {
    pub fn new(bot: Arc<dyn Bot>, model: Arc<dyn GenerativeModel>, model_id: impl Into<String>) -> Self {
        Self {
            bot,
            model,
            model_id: model_id.into(),
        }
    }

    pub fn build_request(&self, language: &str, text: &str) -> GenerationRequest {
        GenerationRequest::new(self.model_id.as_str(), format!("{} | {}", language, text))
            .with_config(grounded_config())
    }

    async fn translate_one(&self, language: &str, text: &str) -> String {
        let label = capitalize(language);
        let request = self.build_request(language, text);
        match self.model.generate_content(&request).await {
            Ok(response) => match response.text().filter(|t| !t.trim().is_empty()) {
                Some(translation) => format!("{}: {}", label, translation),
                None => {
                    warn!(language = %language, finish_reason = ?response.finish_reason, "No text in translation");
                    format!("{}: {}", label, MSG_TRANSLATION_FAILED)
                }
            },
            Err(e) => {
                error!(language = %language, error = %e, "Translation call failed");
                format!("{}: {}", label, MSG_TRANSLATION_FAILED)
            }
        }
    }
}

#[async_trait]
impl Handler for TranslateHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let args = match message.command() {
            Some(cmd) if cmd.is(COMMAND) => cmd.args,
            _ => return Ok(HandlerResponse::Continue),
        };

        let parsed = match parse_translate_args(&args) {
            Some(parsed) => parsed,
            None => {
                self.bot.reply_to(message, MSG_USAGE).await?;
                return Ok(HandlerResponse::Stop);
            }
        };

        info!(
            user_id = message.user.id,
            languages = ?parsed.languages,
            text_len = parsed.text.len(),
            "Processing translation request"
        );

        for language in &parsed.languages {
            let line = self.translate_one(language, &parsed.text).await;
            self.bot.reply_to(message, &line).await?;
        }

        Ok(HandlerResponse::Stop)
    }
}

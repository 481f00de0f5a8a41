//! `/gemini <question>`: one grounded, length-capped answer.

use async_trait::async_trait;
use gbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use gemini_client::{GenerationRequest, GenerativeModel};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::{backend_error, grounded_config};

pub(crate) const COMMAND: &str = "gemini";

const MSG_USAGE: &str = "Usage: /gemini What is AI?";
const MSG_FAILED: &str = "❌ Failed to generate answer.";

/// Answers a free-text question with Google Search grounding.
pub struct AskHandler {
    bot: Arc<dyn Bot>,
    model: Arc<dyn GenerativeModel>,
    model_id: String,
}

impl AskHandler {
    pub fn new(bot: Arc<dyn Bot>, model: Arc<dyn GenerativeModel>, model_id: impl Into<String>) -> Self {
        Self {
            bot,
            model,
            model_id: model_id.into(),
        }
    }

    /// Wraps the question in a length instruction and applies the grounded config.
    pub fn build_request(&self, question: &str) -> GenerationRequest {
        let prompt = format!(
            "Generate answer in minimum token and maximum of 70 tokens: {}",
            question
        );
        GenerationRequest::new(self.model_id.as_str(), prompt).with_config(grounded_config())
    }
}

#[async_trait]
impl Handler for AskHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let question = match message.command() {
            Some(cmd) if cmd.is(COMMAND) => cmd.args,
            _ => return Ok(HandlerResponse::Continue),
        };

        if question.is_empty() {
            self.bot.reply_to(message, MSG_USAGE).await?;
            return Ok(HandlerResponse::Stop);
        }

        info!(
            user_id = message.user.id,
            question_len = question.len(),
            "Processing question"
        );

        let request = self.build_request(&question);
        let response = self
            .model
            .generate_content(&request)
            .await
            .map_err(backend_error)?;

        match response.text().filter(|t| !t.trim().is_empty()) {
            Some(answer) => self.bot.reply_to(message, &answer).await?,
            None => {
                warn!(finish_reason = ?response.finish_reason, "No text in answer");
                self.bot.reply_to(message, MSG_FAILED).await?;
            }
        }

        Ok(HandlerResponse::Stop)
    }
}

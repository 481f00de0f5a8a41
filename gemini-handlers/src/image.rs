//! `/imgen <description>`: text + image generation, parts relayed in order.

use async_trait::async_trait;
use gbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use gemini_client::{GenerationConfig, GenerationRequest, GenerativeModel, Modality, ResponsePart};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::backend_error;

pub(crate) const COMMAND: &str = "imgen";

const MSG_USAGE: &str = "Usage: /imgen Create an image of an orange cat in a cricket stadium";
const MSG_GENERATING: &str = "Generating image... please wait 🧠🖼️";
const MSG_FAILED: &str = "❌ Failed to generate image.";

/// Generates images (and accompanying text) from a description.
///
/// Sends an acknowledgement before the backend call, then one outbound message per response
/// part: text parts as messages, image parts as photos built from the returned bytes. A response
/// with nothing to relay (e.g. blocked by safety filters) gets a fixed failure reply.
pub struct ImageHandler {
    bot: Arc<dyn Bot>,
    model: Arc<dyn GenerativeModel>,
    model_id: String,
}

impl ImageHandler {
    pub fn new(bot: Arc<dyn Bot>, model: Arc<dyn GenerativeModel>, model_id: impl Into<String>) -> Self {
        Self {
            bot,
            model,
            model_id: model_id.into(),
        }
    }

    pub fn build_request(&self, description: &str) -> GenerationRequest {
        GenerationRequest::new(self.model_id.as_str(), description).with_config(
            GenerationConfig::default()
                .with_response_modalities(vec![Modality::Text, Modality::Image]),
        )
    }
}

#[async_trait]
impl Handler for ImageHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let description = match message.command() {
            Some(cmd) if cmd.is(COMMAND) => cmd.args,
            _ => return Ok(HandlerResponse::Continue),
        };

        if description.is_empty() {
            self.bot.reply_to(message, MSG_USAGE).await?;
            return Ok(HandlerResponse::Stop);
        }

        info!(
            user_id = message.user.id,
            prompt_preview = %description.chars().take(50).collect::<String>(),
            "Processing image generation request"
        );

        self.bot.reply_to(message, MSG_GENERATING).await?;

        let request = self.build_request(&description);
        let response = self
            .model
            .generate_content(&request)
            .await
            .map_err(backend_error)?;

        let finish_reason = response.finish_reason;
        let mut relayed = 0usize;
        for part in response.parts {
            match part {
                ResponsePart::Text(text) => {
                    if text.trim().is_empty() {
                        continue;
                    }
                    self.bot.reply_to(message, &text).await?;
                }
                ResponsePart::Image { mime_type, data } => {
                    debug!(mime_type = %mime_type, bytes = data.len(), "Sending generated image");
                    self.bot.send_photo(&message.chat, data).await?;
                }
            }
            relayed += 1;
        }

        if relayed == 0 {
            warn!(finish_reason = ?finish_reason, "Image response has nothing to relay");
            self.bot.reply_to(message, MSG_FAILED).await?;
        }

        Ok(HandlerResponse::Stop)
    }
}

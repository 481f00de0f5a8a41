//! Wraps teloxide::Bot and implements [`gbot_core::Bot`]. Production code sends via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use gbot_core::{Bot as CoreBot, Chat, GbotError, Message, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, InputFile},
};

/// File name attached to generated photos; Telegram re-encodes photos regardless of the name.
const PHOTO_FILE_NAME: &str = "image.png";

/// Thin wrapper around teloxide::Bot that implements gbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| GbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_photo(&self, chat: &Chat, photo: Vec<u8>) -> Result<()> {
        let file = InputFile::memory(photo).file_name(PHOTO_FILE_NAME);
        self.bot
            .send_photo(ChatId(chat.id), file)
            .await
            .map_err(|e| GbotError::Bot(e.to_string()))?;
        Ok(())
    }
}

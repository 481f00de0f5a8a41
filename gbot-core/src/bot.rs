//! Bot abstraction for sending text and photos.
//!
//! [`Bot`] is transport-agnostic; gbot-telegram implements it via teloxide, tests use recording mocks.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for outbound messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Sends raw image bytes as a photo attachment. The bytes are passed through unchanged.
    async fn send_photo(&self, chat: &Chat, photo: Vec<u8>) -> Result<()>;
}

//! Handler that logs every inbound message and the chain's outcome.

use async_trait::async_trait;
use gbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

/// Logs each message in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        if *response == HandlerResponse::Continue {
            debug!(message_id = %message.id, "No handler claimed message");
        } else {
            debug!(message_id = %message.id, response = ?response, "Processed message");
        }
        Ok(())
    }
}

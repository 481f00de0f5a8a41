//! Builds the long-lived clients once and wires them into the handler chain.

use anyhow::Result;
use gbot_core::Bot;
use gbot_telegram::TelegramBotAdapter;
use gemini_client::{GeminiClient, GeminiConfig, GenerativeModel};
use gemini_handlers::{AskHandler, ImageHandler, TranslateHandler};
use handler_chain::{HandlerChain, LoggingHandler};
use std::sync::Arc;
use tracing::info;

use crate::config::BotConfig;

/// Clients shared by every handler invocation.
#[derive(Clone)]
pub struct BotComponents {
    /// Raw teloxide client, used by the REPL and for command registration.
    pub teloxide_bot: teloxide::Bot,
    /// Outbound message sink handed to handlers.
    pub bot: Arc<dyn Bot>,
    pub model: Arc<dyn GenerativeModel>,
}

/// Builds the Telegram and Gemini clients from config.
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let model: Arc<dyn GenerativeModel> = Arc::new(GeminiClient::from_config(&config.gemini)?);

    info!(
        text_model = %config.gemini.text_model,
        image_model = %config.gemini.image_model,
        base_url = %config.gemini.base_url,
        "Gemini client ready"
    );

    Ok(BotComponents {
        teloxide_bot,
        bot,
        model,
    })
}

/// LoggingHandler first, then one handler per command.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    model: Arc<dyn GenerativeModel>,
    gemini: &GeminiConfig,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(AskHandler::new(
            bot.clone(),
            model.clone(),
            gemini.text_model.as_str(),
        )))
        .add_handler(Arc::new(TranslateHandler::new(
            bot.clone(),
            model.clone(),
            gemini.text_model.as_str(),
        )))
        .add_handler(Arc::new(ImageHandler::new(
            bot,
            model,
            gemini.image_model.as_str(),
        )))
}

use anyhow::Result;
use gbot_core::init_tracing;
use gbot_telegram::{register_commands, run_repl};
use gemini_client::mask_token;
use gemini_handlers::COMMANDS;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;

/// Main entry: validate config, init logging, build clients and handler chain, register the
/// command menu, then run the REPL until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        bot_token = %mask_token(config.bot_token()),
        telegram_api_url = ?config.telegram_api_url(),
        max_in_flight = ?config.max_in_flight,
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    let handler_chain = build_handler_chain(
        components.bot.clone(),
        components.model.clone(),
        &config.gemini,
    );

    register_commands(&components.teloxide_bot, COMMANDS).await;

    info!(handlers = handler_chain.len(), "Bot started successfully");

    run_repl(components.teloxide_bot, handler_chain, config.max_in_flight).await
}

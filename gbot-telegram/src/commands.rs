//! Registers the bot's command menu with Telegram (`setMyCommands`).

use teloxide::{prelude::*, types::BotCommand};
use tracing::{info, instrument, warn};

/// Converts `(command, description)` pairs into teloxide [`BotCommand`]s.
pub fn bot_commands(commands: &[(&str, &str)]) -> Vec<BotCommand> {
    commands
        .iter()
        .map(|(command, description)| BotCommand::new(*command, *description))
        .collect()
}

/// Publishes the command menu. Failure only costs the menu, so it is logged and swallowed.
#[instrument(skip(bot, commands))]
pub async fn register_commands(bot: &teloxide::Bot, commands: &[(&str, &str)]) {
    match bot.set_my_commands(bot_commands(commands)).await {
        Ok(_) => info!(count = commands.len(), "Bot commands registered"),
        Err(e) => warn!(error = %e, "Failed to register bot commands"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_commands_keep_order_and_text() {
        let commands = bot_commands(&[("gemini", "Ask"), ("imgen", "Draw")]);
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].command, "gemini");
        assert_eq!(commands[0].description, "Ask");
        assert_eq!(commands[1].command, "imgen");
    }
}

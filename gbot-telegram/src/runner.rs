//! REPL runner: converts teloxide messages to core::Message and passes them to the HandlerChain,
//! one spawned task per message.

use gbot_core::{Message, ToCoreMessage};
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Starts the long-polling REPL.
///
/// Calls get_me() first so commands addressed to another bot (`/cmd@other_bot`) can be dropped.
/// Every text message is converted and handled in its own task, so a slow backend call never
/// blocks other chats. With `max_in_flight`, at most that many messages are handled at once;
/// the rest wait for a permit. Handler errors are logged here and go no further.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    max_in_flight: Option<usize>,
) -> anyhow::Result<()> {
    let bot_username: Arc<Option<String>> = match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone();
            info!(username = ?username, "Bot identity resolved");
            Arc::new(username)
        }
        Err(e) => {
            warn!(error = %e, "get_me failed; addressed commands will not be filtered");
            Arc::new(None)
        }
    };
    let limiter = max_in_flight.map(|n| Arc::new(Semaphore::new(n)));

    let chain = handler_chain;
    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let chain = chain.clone();
        let bot_username = bot_username.clone();
        let limiter = limiter.clone();

        async move {
            if msg.text().is_none() {
                debug!(chat_id = msg.chat.id.0, "Ignoring non-text message");
                return respond(());
            }

            let core_msg = TelegramMessageWrapper(&msg).to_core();
            dispatch(chain, core_msg, bot_username.as_deref(), limiter);

            respond(())
        }
    })
    .await;

    Ok(())
}

/// Hands one converted message to the chain on its own task.
///
/// Returns None without spawning when the message is a command addressed to a bot other than
/// `bot_username`. With a `limiter`, the task waits for a permit before running the chain.
pub fn dispatch(
    chain: HandlerChain,
    message: Message,
    bot_username: Option<&str>,
    limiter: Option<Arc<Semaphore>>,
) -> Option<JoinHandle<()>> {
    if let (Some(cmd), Some(username)) = (message.command(), bot_username) {
        if !cmd.is_for(username) {
            debug!(command = %cmd.name, addressee = ?cmd.addressee, "Command addressed to another bot");
            return None;
        }
    }

    Some(tokio::spawn(async move {
        let _permit = match limiter {
            Some(sem) => match sem.acquire_owned().await {
                Ok(permit) => Some(permit),
                Err(_) => return,
            },
            None => None,
        };

        if let Err(e) = chain.handle(&message).await {
            error!(
                error = %e,
                user_id = message.user.id,
                chat_id = message.chat.id,
                "Handler chain failed"
            );
        }
    }))
}

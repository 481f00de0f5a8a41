//! # gbot-telegram
//!
//! Telegram layer: teloxide → core adapters, [`gbot_core::Bot`] implementation, minimal config,
//! command menu registration and the REPL runner that feeds each message to a handler chain.
//! No AI logic lives here.

mod adapters;
mod bot_adapter;
mod commands;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use commands::{bot_commands, register_commands};
pub use config::TelegramConfig;
pub use runner::{dispatch, run_repl};

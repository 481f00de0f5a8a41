//! # gbot
//!
//! Telegram bot relaying `/gemini`, `/translate` and `/imgen` to Gemini. Loads config from env,
//! builds the Telegram and Gemini clients once, wires the handler chain and runs the REPL.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::BotConfig;
pub use runner::run_bot;

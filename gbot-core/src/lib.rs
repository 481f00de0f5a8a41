//! # gbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Handler`], message and user types, command
//! parsing, error types and tracing initialization. Transport-agnostic; used by gbot-telegram,
//! handler-chain and gemini-handlers.

pub mod bot;
pub mod command;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use command::CommandInvocation;
pub use error::{GbotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};

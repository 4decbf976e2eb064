//! Discord bot integration.
//!
//! Connects to the gateway, registers the slash commands and hands every command
//! interaction to the `CommandDispatcher`. The bot's HTTP client is shared with the
//! roster scheduler, so both use one authenticated Discord client.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is requested. Slash commands arrive as interactions regardless of
//! intents, and member roles are fetched over HTTP, so no privileged intent is needed.

pub mod command;
pub mod discord;
pub mod handler;
pub mod start;

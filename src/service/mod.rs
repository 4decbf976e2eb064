//! Business logic of the bot.
//!
//! Services orchestrate calls between the player directory (`data/`) and the chat
//! platform seams defined here. They never touch serenity builders directly; output
//! is described with `Notice`s and delivered through `ChatNotifier` implementations
//! living in `bot/`.
//!
//! - `builder` - Player summaries and notice construction
//! - `command` - Dispatch of parsed slash commands through the auth guard
//! - `moderation` - Ban/unban workflow
//! - `notifier` - Traits for delivering notices
//! - `player` - Read-only player info
//! - `roster` - Server list reconciliation

pub mod builder;
pub mod command;
pub mod moderation;
pub mod notifier;
pub mod player;
pub mod roster;

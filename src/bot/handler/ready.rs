//! Ready event handler for bot initialization.
//!
//! Fired after every successful gateway handshake, including reconnects. Command
//! registration is idempotent, so re-registering on each ready event is harmless.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Sets the bot's activity and registers the global slash commands. A failed
/// registration is logged; the bot keeps serving whatever commands Discord
/// already has registered.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Watching over AGDB servers")));

    match Command::set_global_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}

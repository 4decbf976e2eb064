use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::{bot::handler::Handler, error::AppError, state::BotState};

/// Builds the Discord client without connecting it.
///
/// The HTTP client is returned separately so the roster scheduler can start before
/// the gateway connection blocks.
///
/// # Arguments
/// - `state` - Shared bot state handed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP client
/// - `Err(AppError::DiscordErr)` - Invalid token or client setup failure
pub async fn init_bot(state: BotState) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;
    let token = state.config.discord_token.clone();

    let client = Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and processes events until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

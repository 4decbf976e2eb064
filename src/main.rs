mod bot;
mod config;
mod data;
mod error;
mod middleware;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use crate::{
    config::Config, data::player_directory::PlayerDirectoryClient, error::AppError,
    scheduler::serverlist, state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let directory = PlayerDirectoryClient::new(
        http_client,
        config.agdb_api_url.clone(),
        config.agdb_master_key.clone(),
    );
    let state = BotState::new(config, Arc::new(directory));

    let (bot_client, discord_http) = bot::start::init_bot(state.clone()).await?;

    let scheduler_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = serverlist::start_scheduler(scheduler_state, discord_http).await {
            tracing::error!("Server list scheduler error: {}", e);
        }
    });

    bot::start::start_bot(bot_client).await
}

use serenity::http::Http;
use std::{sync::Arc, time::Duration};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    bot::discord::DiscordRosterChannel, config::SERVERLIST_REFRESH_SECS, error::AppError,
    service::roster::RosterService, state::BotState,
};

/// Starts the server list scheduler
///
/// Runs one reconciliation cycle right away, then every `SERVERLIST_REFRESH_SECS`.
/// A failed cycle is logged and the next one runs on schedule.
///
/// # Arguments
/// - `state`: Shared bot state with the AGDB client and channel configuration
/// - `discord_http`: Discord HTTP client used to read and write the roster channel
pub async fn start_scheduler(state: BotState, discord_http: Arc<Http>) -> Result<(), AppError> {
    run_cycle(&state, &discord_http).await;

    let scheduler = JobScheduler::new().await?;

    let job_state = state.clone();
    let job_http = discord_http.clone();

    let job = Job::new_repeated_async(
        Duration::from_secs(SERVERLIST_REFRESH_SECS),
        move |_uuid, _lock| {
            let state = job_state.clone();
            let http = job_http.clone();

            Box::pin(async move {
                run_cycle(&state, &http).await;
            })
        },
    )?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Server list scheduler started");

    Ok(())
}

async fn run_cycle(state: &BotState, discord_http: &Arc<Http>) {
    let channel =
        DiscordRosterChannel::new(discord_http.clone(), state.config.serverlist_channel_id);

    if let Err(e) = RosterService::new(state.directory.as_ref(), &channel)
        .reconcile()
        .await
    {
        tracing::error!("Error updating server list: {}", e);
    }
}

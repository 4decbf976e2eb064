use serenity::all::{ChannelId, CommandInteraction, Context};

use crate::{
    bot::{
        command,
        discord::{HttpRoleLookup, InteractionResponder},
    },
    service::{command::CommandDispatcher, notifier::CommandResponder},
    state::BotState,
};

/// Handles a slash command interaction.
///
/// Converts the interaction into an `Invocation` and runs it through the
/// dispatcher. An interaction that cannot be parsed is answered with the generic
/// failure reply so the user is never left without a response.
pub async fn handle_command(state: &BotState, ctx: Context, interaction: CommandInteraction) {
    let responder = InteractionResponder::new(
        ctx.http.clone(),
        interaction.clone(),
        ChannelId::new(state.config.ban_log_channel_id),
    );

    let invocation = match command::parse_invocation(&interaction) {
        Ok(invocation) => invocation,
        Err(e) => {
            if let Err(e) = responder.respond(e.into_notice()).await {
                tracing::error!("Failed to answer unparsable interaction: {}", e);
            }
            return;
        }
    };

    tracing::debug!(
        "/{} invoked by {} in {:?}",
        invocation.command.name(),
        invocation.user_id,
        invocation.guild_id
    );

    let roles = HttpRoleLookup::new(ctx.http.clone());
    let dispatcher = CommandDispatcher::new(
        state.directory.as_ref(),
        &roles,
        state.config.agdb_guild_id,
        state.config.admin_role_id,
    );

    dispatcher.dispatch(&invocation, &responder).await;
}

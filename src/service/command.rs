//! Slash command dispatch.
//!
//! Platform-neutral entry point for every command. Each command declares its
//! permissions; the dispatcher checks them with `AuthGuard`, runs the command body,
//! and turns any error into a reply for the requester. No error escapes `dispatch`.

use crate::{
    data::player_directory::PlayerDirectory,
    error::AppError,
    middleware::auth::{AuthGuard, Permission, RoleLookup},
    model::command::{BotCommand, Invocation},
    service::{
        moderation::{ModerationReport, ModerationService},
        notifier::CommandResponder,
        player::PlayerService,
    },
};

/// Permissions a command requires, in check order.
pub fn permissions(command: &BotCommand) -> &'static [Permission] {
    match command {
        BotCommand::Info { .. } => &[Permission::GuildOnly],
        BotCommand::Ban { .. } | BotCommand::Unban { .. } => {
            &[Permission::GuildOnly, Permission::Admin]
        }
    }
}

pub struct CommandDispatcher<'a> {
    directory: &'a dyn PlayerDirectory,
    roles: &'a dyn RoleLookup,
    agdb_guild_id: u64,
    admin_role_id: u64,
}

impl<'a> CommandDispatcher<'a> {
    pub fn new(
        directory: &'a dyn PlayerDirectory,
        roles: &'a dyn RoleLookup,
        agdb_guild_id: u64,
        admin_role_id: u64,
    ) -> Self {
        Self {
            directory,
            roles,
            agdb_guild_id,
            admin_role_id,
        }
    }

    /// Authorizes and runs a command, answering the requester in every case.
    ///
    /// Denials are answered immediately. Authorized commands are deferred first,
    /// since AGDB calls can take up to the client timeout, and answered with a
    /// followup.
    pub async fn dispatch(&self, invocation: &Invocation, responder: &dyn CommandResponder) {
        let guard = AuthGuard::new(self.roles, self.agdb_guild_id, self.admin_role_id);

        if let Err(e) = guard
            .require(invocation, permissions(&invocation.command))
            .await
        {
            if let Err(e) = responder.respond(e.into_notice()).await {
                tracing::error!("Failed to send denial for /{}: {}", invocation.command.name(), e);
            }
            return;
        }

        if let Err(e) = responder.defer().await {
            tracing::error!("Failed to defer /{}: {}", invocation.command.name(), e);
            return;
        }

        if let Err(e) = self.execute(&invocation.command, responder).await {
            if let Err(e) = responder.reply(e.into_notice()).await {
                tracing::error!(
                    "Failed to send error reply for /{}: {}",
                    invocation.command.name(),
                    e
                );
            }
        }
    }

    async fn execute(
        &self,
        command: &BotCommand,
        responder: &dyn CommandResponder,
    ) -> Result<(), AppError> {
        match command {
            BotCommand::Info { steam_id } => {
                PlayerService::new(self.directory)
                    .info(steam_id, responder)
                    .await
            }
            BotCommand::Ban { steam_id, reason } => {
                let report = ModerationService::new(self.directory)
                    .ban(steam_id, reason, responder)
                    .await?;
                log_report("ban", &report);
                Ok(())
            }
            BotCommand::Unban { steam_id } => {
                let report = ModerationService::new(self.directory)
                    .unban(steam_id, responder)
                    .await?;
                log_report("unban", &report);
                Ok(())
            }
        }
    }
}

fn log_report(command: &str, report: &ModerationReport) {
    tracing::info!(
        "/{} completed for {}: AGDB says \"{}\", player now banned={}",
        command,
        report.result.steam_id,
        report.result.message,
        report.player.is_banned
    );
}

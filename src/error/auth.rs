use thiserror::Error;

use crate::model::notice::Notice;

/// Message shown when a guild-only command is used in DMs.
pub const GUILD_ONLY_MESSAGE: &str = "This command cannot be used in DMs. Consider joining the AGDB Discord server to use this command and many more! https://discord.gg/8btSjbYYFc";

/// Message shown when the invoking user lacks the admin role.
pub const ACCESS_DENIED_MESSAGE: &str = "You don't have permission to use this command";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Command was invoked outside of a guild.
    ///
    /// Results in an ephemeral reply pointing the user to the AGDB Discord server.
    #[error("Command {0} invoked outside of a guild")]
    GuildOnly(String),

    /// User does not hold the configured admin role in the AGDB guild.
    ///
    /// Results in an ephemeral permission-denied reply.
    #[error("User {user_id} is missing the admin role required for {command}")]
    AccessDenied { user_id: u64, command: String },

    /// Roles of the invoking user could not be resolved.
    ///
    /// The check fails closed: the user may not be a member of the AGDB guild,
    /// or Discord could not be reached. Results in a generic error reply.
    #[error("Failed to resolve roles of user {user_id} in guild {guild_id}: {reason}")]
    MemberLookup {
        user_id: u64,
        guild_id: u64,
        reason: String,
    },
}

impl AuthError {
    /// Converts an authorization failure into the requester-facing reply.
    ///
    /// Denials are expected traffic and only logged at debug level. Lookup failures
    /// are operational problems and logged as errors with a generic reply.
    ///
    /// # Returns
    /// - Ephemeral `Notice` with the denial or a generic failure message
    pub fn into_notice(self) -> Notice {
        match self {
            Self::GuildOnly(_) => {
                tracing::debug!("{}", self);
                Notice::ephemeral(GUILD_ONLY_MESSAGE)
            }
            Self::AccessDenied { .. } => {
                tracing::debug!("{}", self);
                Notice::ephemeral(ACCESS_DENIED_MESSAGE)
            }
            Self::MemberLookup { .. } => {
                tracing::error!("{}", self);
                Notice::ephemeral(super::GENERIC_FAILURE_MESSAGE)
            }
        }
    }
}

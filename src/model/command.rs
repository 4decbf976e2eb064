//! Parsed slash-command invocations.

/// A slash command with its arguments already extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// Read-only player lookup.
    Info { steam_id: String },
    /// Ban a player with a reason.
    Ban { steam_id: String, reason: String },
    /// Lift a player's ban.
    Unban { steam_id: String },
}

impl BotCommand {
    /// Slash command name as registered with Discord.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Info { .. } => "info",
            Self::Ban { .. } => "ban",
            Self::Unban { .. } => "unban",
        }
    }
}

/// Context of a single command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Guild the command was used in, `None` for DMs.
    pub guild_id: Option<u64>,
    /// Discord ID of the invoking user.
    pub user_id: u64,
    pub command: BotCommand,
}

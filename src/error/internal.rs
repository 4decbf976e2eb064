use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Player vanished right after AGDB confirmed a ban or unban.
    ///
    /// AGDB just acknowledged the player exists, so the refresh failing means the
    /// upstream broke its own contract. Results in a generic reply; the moderation
    /// action itself is not rolled back.
    #[error("Failed to refresh player {steam_id} after {action}: {reason}")]
    PlayerRefreshFailed {
        steam_id: String,
        action: String,
        reason: String,
    },

    /// A required slash-command option was missing or had the wrong type.
    ///
    /// Discord enforces required options, so this only happens when the registered
    /// command definitions and the parser disagree.
    #[error("Command {command} is missing required option {option}")]
    MissingOption { command: String, option: String },

    /// An interaction arrived for a command the bot does not register.
    #[error("Received unknown command {0}")]
    UnknownCommand(String),
}

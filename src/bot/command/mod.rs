//! Slash command definitions and parsing.
//!
//! Each command module owns its registration builder and its option parser, so the
//! option names Discord is told about and the names read back always match.

use serenity::all::{CommandInteraction, CreateCommand};
use std::collections::HashMap;

use crate::{
    error::{internal::InternalError, AppError},
    model::command::{BotCommand, Invocation},
};

pub mod ban;
pub mod info;
pub mod unban;

/// Option holding the target player's Steam ID, shared by all commands.
pub const STEAM_ID_OPTION: &str = "steam_id";

/// String options of an interaction keyed by option name.
pub type CommandOptions<'a> = HashMap<&'a str, &'a str>;

/// All slash commands the bot registers globally.
pub fn definitions() -> Vec<CreateCommand> {
    vec![info::register(), ban::register(), unban::register()]
}

/// Converts a command interaction into a platform-neutral `Invocation`.
///
/// # Returns
/// - `Ok(Invocation)` - Known command with all required options
/// - `Err(AppError::InternalErr)` - Unknown command or missing option
pub fn parse_invocation(interaction: &CommandInteraction) -> Result<Invocation, AppError> {
    let options: CommandOptions = interaction
        .data
        .options
        .iter()
        .filter_map(|option| option.value.as_str().map(|value| (option.name.as_str(), value)))
        .collect();

    Ok(Invocation {
        guild_id: interaction.guild_id.map(|id| id.get()),
        user_id: interaction.user.id.get(),
        command: parse_command(&interaction.data.name, &options)?,
    })
}

/// Parses a command by name from its string options.
pub fn parse_command(name: &str, options: &CommandOptions) -> Result<BotCommand, InternalError> {
    match name {
        info::NAME => info::parse(options),
        ban::NAME => ban::parse(options),
        unban::NAME => unban::parse(options),
        other => Err(InternalError::UnknownCommand(other.to_string())),
    }
}

/// Reads a required string option.
pub(super) fn required(
    command: &str,
    options: &CommandOptions,
    option: &str,
) -> Result<String, InternalError> {
    options
        .get(option)
        .map(|value| value.trim().to_string())
        .ok_or_else(|| InternalError::MissingOption {
            command: command.to_string(),
            option: option.to_string(),
        })
}

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use super::{required, CommandOptions, STEAM_ID_OPTION};
use crate::{error::internal::InternalError, model::command::BotCommand};

pub const NAME: &str = "ban";

const REASON_OPTION: &str = "reason";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Bans a player")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                STEAM_ID_OPTION,
                "SteamID of the player to ban",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, REASON_OPTION, "Reason for the ban")
                .required(true),
        )
}

pub fn parse(options: &CommandOptions) -> Result<BotCommand, InternalError> {
    Ok(BotCommand::Ban {
        steam_id: required(NAME, options, STEAM_ID_OPTION)?,
        reason: required(NAME, options, REASON_OPTION)?,
    })
}

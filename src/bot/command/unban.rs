use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use super::{required, CommandOptions, STEAM_ID_OPTION};
use crate::{error::internal::InternalError, model::command::BotCommand};

pub const NAME: &str = "unban";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Unbans a player")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                STEAM_ID_OPTION,
                "SteamID of the player to unban",
            )
            .required(true),
        )
}

pub fn parse(options: &CommandOptions) -> Result<BotCommand, InternalError> {
    Ok(BotCommand::Unban {
        steam_id: required(NAME, options, STEAM_ID_OPTION)?,
    })
}

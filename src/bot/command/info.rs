use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use super::{required, CommandOptions, STEAM_ID_OPTION};
use crate::{error::internal::InternalError, model::command::BotCommand};

pub const NAME: &str = "info";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Returns a player's information")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                STEAM_ID_OPTION,
                "SteamID of the player to check",
            )
            .required(true),
        )
}

pub fn parse(options: &CommandOptions) -> Result<BotCommand, InternalError> {
    Ok(BotCommand::Info {
        steam_id: required(NAME, options, STEAM_ID_OPTION)?,
    })
}

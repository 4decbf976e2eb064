use url::Url;

use crate::error::{config::ConfigError, AppError};

/// How long a single AGDB API call may take before it is reported as unavailable.
pub const AGDB_REQUEST_TIMEOUT_SECS: u64 = 20;

/// Interval between roster reconciliation cycles.
pub const SERVERLIST_REFRESH_SECS: u64 = 10 * 60;

/// Number of most recent roster channel messages searched for the bot's message.
pub const SERVERLIST_LOOKBACK: u8 = 100;

pub struct Config {
    pub discord_token: String,

    /// Guild whose roles decide who may moderate.
    pub agdb_guild_id: u64,
    pub admin_role_id: u64,
    /// Channel receiving the audit record of every ban and unban.
    pub ban_log_channel_id: u64,
    /// Channel holding the single server roster message.
    pub serverlist_channel_id: u64,

    pub agdb_api_url: Url,
    pub agdb_master_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_token: env_var("DISCORD_TOKEN")?,
            agdb_guild_id: env_id("DISCORD_AGDB_GUILD_ID")?,
            admin_role_id: env_id("DISCORD_ADMIN_ROLE_ID")?,
            ban_log_channel_id: env_id("DISCORD_BAN_LOG_CHANNEL_ID")?,
            serverlist_channel_id: env_id("DISCORD_AGDB_SERVERLIST_CHANNEL_ID")?,
            agdb_api_url: env_url("AGDB_API_URL")?,
            agdb_master_key: env_var("AGDB_MASTER_KEY")?,
        })
    }
}

fn env_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a Discord snowflake from the environment.
fn env_id(name: &str) -> Result<u64, ConfigError> {
    let value = env_var(name)?;

    value
        .trim()
        .parse::<u64>()
        .map_err(|source| ConfigError::InvalidId {
            name: name.to_string(),
            value,
            source,
        })
}

/// Reads the AGDB base URL, normalised to end with `/` so endpoint paths join
/// underneath it instead of replacing its last segment.
fn env_url(name: &str) -> Result<Url, ConfigError> {
    let value = env_var(name)?;
    parse_base_url(&value).map_err(|source| ConfigError::InvalidUrl {
        name: name.to_string(),
        value,
        source,
    })
}

pub fn parse_base_url(value: &str) -> Result<Url, url::ParseError> {
    let trimmed = value.trim();
    if trimmed.ends_with('/') {
        Url::parse(trimmed)
    } else {
        Url::parse(&format!("{}/", trimmed))
    }
}

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the
    /// `.env.example` file for the full list of required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable holding a Discord snowflake is not a valid `u64`.
    #[error("Environment variable {name} has invalid ID '{value}': {source}")]
    InvalidId {
        name: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// `AGDB_API_URL` is not an absolute URL.
    #[error("Environment variable {name} has invalid URL '{value}': {source}")]
    InvalidUrl {
        name: String,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

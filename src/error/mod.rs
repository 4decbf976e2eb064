//! Error types and reply handling.
//!
//! This module provides the bot's error hierarchy and the conversion from errors
//! to requester-facing replies. `AppError` is the top-level type that wraps the
//! domain-specific errors; `AppError::into_notice` is the single place where the
//! logging policy and the user-visible message for each kind of failure live.

pub mod auth;
pub mod config;
pub mod directory;
pub mod internal;

use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, directory::DirectoryError, internal::InternalError},
    model::notice::Notice,
};

/// Generic reply for failures whose details must not reach the requester.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while processing this command, please try again later.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic conversion. Nothing of this type ever escapes a command
/// handler or a roster cycle; it is either converted into a reply or logged.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authorization denial or role lookup failure.
    ///
    /// Delegates to `AuthError::into_notice()` for the reply.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// AGDB player directory error.
    #[error(transparent)]
    DirectoryErr(#[from] DirectoryError),

    /// Broken invariant inside the bot.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// HTTP client construction error during startup.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error.
    ///
    /// The message is shown to the requester as-is.
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts an error into the reply sent back to the requester.
    ///
    /// Maps each error variant to a user-visible message:
    /// - `AuthErr` → delegated to `AuthError::into_notice()` (ephemeral)
    /// - `NotFound` → the contained message
    /// - `DirectoryErr(NotFound)` → "Player not found"
    /// - everything else → generic failure message, full error logged
    ///
    /// # Returns
    /// - `Notice` - Reply safe to show to the requester
    pub fn into_notice(self) -> Notice {
        match self {
            Self::AuthErr(err) => err.into_notice(),
            Self::NotFound(msg) => Notice::text(msg),
            Self::DirectoryErr(DirectoryError::NotFound(_)) => Notice::text("Player not found"),
            err => GenericFailure(err).into_notice(),
        }
    }
}

/// Wrapper for converting any displayable error into the generic failure reply.
///
/// Logs the error message and returns a generic message to the requester to avoid
/// leaking implementation details. Used as a fallback for errors that don't have a
/// specific reply.
pub struct GenericFailure<E>(pub E);

impl<E: std::fmt::Display> GenericFailure<E> {
    pub fn into_notice(self) -> Notice {
        tracing::error!("{}", self.0);

        Notice::text(GENERIC_FAILURE_MESSAGE)
    }
}

use serenity::async_trait;

use crate::{error::AppError, model::notice::Notice};

/// Delivery of notices produced while handling a command.
#[async_trait]
pub trait ChatNotifier: Send + Sync {
    /// Sends a notice to the user who invoked the command.
    async fn reply(&self, notice: Notice) -> Result<(), AppError>;

    /// Posts a notice to the ban log channel.
    async fn audit(&self, notice: Notice) -> Result<(), AppError>;
}

/// Interaction lifecycle on top of `ChatNotifier`.
///
/// A command is either answered immediately with `respond` (denials) or deferred
/// with `defer` and answered later through `reply`.
#[async_trait]
pub trait CommandResponder: ChatNotifier {
    /// Acknowledges the interaction before slow work starts.
    async fn defer(&self) -> Result<(), AppError>;

    /// Answers the interaction immediately.
    async fn respond(&self, notice: Notice) -> Result<(), AppError>;
}

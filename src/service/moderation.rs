//! Ban and unban workflow.
//!
//! Each request runs three linear steps with no retry:
//! 1. **Mutate** - ban or unban in AGDB
//! 2. **Refresh** - re-fetch the player AGDB just acknowledged
//! 3. **Notify** - confirm to the requester, then post the audit record
//!
//! The two notifications are independent. Once AGDB accepted the mutation the
//! request counts as successful even if a notification fails; nothing is rolled back.

use crate::{
    data::player_directory::PlayerDirectory,
    error::{directory::DirectoryError, internal::InternalError, AppError},
    model::player::{ModerationAction, ModerationResult, Player},
    service::{builder, notifier::ChatNotifier},
};

/// Result of a completed moderation request.
#[derive(Debug, Clone, PartialEq)]
pub struct ModerationReport {
    pub result: ModerationResult,
    /// Player as AGDB reported it right after the mutation.
    pub player: Player,
}

pub struct ModerationService<'a> {
    directory: &'a dyn PlayerDirectory,
}

impl<'a> ModerationService<'a> {
    pub fn new(directory: &'a dyn PlayerDirectory) -> Self {
        Self { directory }
    }

    /// Bans a player and notifies the requester and the ban log.
    ///
    /// # Arguments
    /// - `steam_id` - Player to ban
    /// - `reason` - Ban reason sent to AGDB
    /// - `notifier` - Delivery for the confirmation and the audit record
    ///
    /// # Returns
    /// - `Ok(ModerationReport)` - AGDB accepted the ban
    /// - `Err(AppError::NotFound)` - AGDB does not know the player; nothing was sent
    /// - `Err(AppError::DirectoryErr)` - AGDB unavailable; nothing was sent
    /// - `Err(AppError::InternalErr)` - Player could not be re-fetched after the ban
    pub async fn ban(
        &self,
        steam_id: &str,
        reason: &str,
        notifier: &dyn ChatNotifier,
    ) -> Result<ModerationReport, AppError> {
        self.moderate(ModerationAction::Ban, steam_id, Some(reason), notifier)
            .await
    }

    /// Unbans a player and notifies the requester and the ban log.
    ///
    /// Same outcomes as `ban`.
    pub async fn unban(
        &self,
        steam_id: &str,
        notifier: &dyn ChatNotifier,
    ) -> Result<ModerationReport, AppError> {
        self.moderate(ModerationAction::Unban, steam_id, None, notifier)
            .await
    }

    async fn moderate(
        &self,
        action: ModerationAction,
        steam_id: &str,
        reason: Option<&str>,
        notifier: &dyn ChatNotifier,
    ) -> Result<ModerationReport, AppError> {
        let mutation = match action {
            ModerationAction::Ban => {
                self.directory
                    .ban(steam_id, reason.unwrap_or_default())
                    .await
            }
            ModerationAction::Unban => self.directory.unban(steam_id).await,
        };

        let result = mutation.map_err(|e| match e {
            DirectoryError::NotFound(_) => AppError::NotFound(format!(
                "Failed to {} player, player not found",
                action.verb()
            )),
            e => e.into(),
        })?;

        tracing::info!("Player {} {} in AGDB", steam_id, action.past_tense().to_lowercase());

        let player = self.directory.lookup(steam_id).await.map_err(|e| {
            InternalError::PlayerRefreshFailed {
                steam_id: steam_id.to_string(),
                action: action.verb().to_string(),
                reason: e.to_string(),
            }
        })?;

        if let Err(e) = notifier
            .reply(builder::moderation_confirmation(action, &result))
            .await
        {
            tracing::error!(
                "Failed to confirm {} of {} to requester: {}",
                action.verb(),
                steam_id,
                e
            );
        }

        if let Err(e) = notifier
            .audit(builder::audit_record(action, &player, reason))
            .await
        {
            tracing::warn!(
                "Failed to post {} of {} to ban log: {}",
                action.verb(),
                steam_id,
                e
            );
        }

        Ok(ModerationReport { result, player })
    }
}

use crate::{
    data::player_directory::PlayerDirectory,
    error::{directory::DirectoryError, AppError},
    service::{builder, notifier::ChatNotifier},
};

/// Read-only player queries.
pub struct PlayerService<'a> {
    directory: &'a dyn PlayerDirectory,
}

impl<'a> PlayerService<'a> {
    pub fn new(directory: &'a dyn PlayerDirectory) -> Self {
        Self { directory }
    }

    /// Looks up a player and replies with their summary.
    ///
    /// # Returns
    /// - `Ok(())` - Summary sent to the requester
    /// - `Err(AppError::NotFound)` - AGDB does not know the player; nothing was sent
    /// - `Err(AppError::DirectoryErr)` - AGDB unavailable; nothing was sent
    pub async fn info(&self, steam_id: &str, notifier: &dyn ChatNotifier) -> Result<(), AppError> {
        let player = self.directory.lookup(steam_id).await.map_err(|e| match e {
            DirectoryError::NotFound(_) => AppError::NotFound("Player not found".to_string()),
            e => e.into(),
        })?;

        notifier.reply(builder::player_info(&player)).await
    }
}

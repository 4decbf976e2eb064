use serenity::async_trait;
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use crate::{
    data::player_directory::PlayerDirectory,
    error::directory::DirectoryError,
    model::{
        player::{ModerationResult, Player},
        server::ServerEntry,
    },
};

#[derive(Default)]
struct State {
    players: HashMap<String, Player>,
    servers: Vec<ServerEntry>,
    calls: Vec<String>,
    unavailable: bool,
    vanish_after_moderation: bool,
    drop_ban_reason: bool,
    ignore_bans: bool,
}

/// In-memory `PlayerDirectory` recording every call.
#[derive(Default)]
pub struct FakeDirectory {
    state: Mutex<State>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn with_player(self, player: Player) -> Self {
        self.state()
            .players
            .insert(player.steam_id.clone(), player);
        self
    }

    pub fn with_servers(self, servers: Vec<ServerEntry>) -> Self {
        self.state().servers = servers;
        self
    }

    /// Every call fails as if AGDB answered 503.
    pub fn unavailable(self) -> Self {
        self.state().unavailable = true;
        self
    }

    /// Players disappear right after a successful ban or unban.
    pub fn vanish_after_moderation(self) -> Self {
        self.state().vanish_after_moderation = true;
        self
    }

    /// Bans succeed but AGDB keeps no ban reason on the player.
    pub fn without_ban_reason(self) -> Self {
        self.state().drop_ban_reason = true;
        self
    }

    /// Bans are acknowledged but the player stays unbanned.
    pub fn ignoring_bans(self) -> Self {
        self.state().ignore_bans = true;
        self
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.state().unavailable = unavailable;
    }

    pub fn set_servers(&self, servers: Vec<ServerEntry>) {
        self.state().servers = servers;
    }

    /// Calls made so far, formatted as `method:argument`.
    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    pub fn player(&self, steam_id: &str) -> Option<Player> {
        self.state().players.get(steam_id).cloned()
    }

    fn begin(&self, call: String, endpoint: &str) -> Result<MutexGuard<'_, State>, DirectoryError> {
        let mut state = self.state();
        state.calls.push(call);
        if state.unavailable {
            return Err(DirectoryError::Status {
                endpoint: endpoint.to_string(),
                status: 503,
            });
        }
        Ok(state)
    }

    fn moderate(
        &self,
        call: String,
        steam_id: &str,
        banned: bool,
        reason: Option<&str>,
    ) -> Result<ModerationResult, DirectoryError> {
        let mut state = self.begin(call, "players/moderate")?;
        let vanish = state.vanish_after_moderation;
        let drop_reason = state.drop_ban_reason;
        let ignore = banned && state.ignore_bans;

        let Some(player) = state.players.get_mut(steam_id) else {
            return Err(DirectoryError::NotFound(steam_id.to_string()));
        };
        if !ignore {
            player.is_banned = banned;
            player.ban_reason = if drop_reason {
                None
            } else {
                reason.map(str::to_string)
            };
        }

        if vanish {
            state.players.remove(steam_id);
        }

        Ok(ModerationResult {
            steam_id: steam_id.to_string(),
            message: if banned {
                "Player has been banned".to_string()
            } else {
                "Player has been unbanned".to_string()
            },
        })
    }
}

#[async_trait]
impl PlayerDirectory for FakeDirectory {
    async fn lookup(&self, steam_id: &str) -> Result<Player, DirectoryError> {
        let state = self.begin(format!("lookup:{}", steam_id), "players")?;
        state
            .players
            .get(steam_id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(steam_id.to_string()))
    }

    async fn ban(&self, steam_id: &str, reason: &str) -> Result<ModerationResult, DirectoryError> {
        self.moderate(format!("ban:{}", steam_id), steam_id, true, Some(reason))
    }

    async fn unban(&self, steam_id: &str) -> Result<ModerationResult, DirectoryError> {
        self.moderate(format!("unban:{}", steam_id), steam_id, false, None)
    }

    async fn list_servers(&self) -> Result<Vec<ServerEntry>, DirectoryError> {
        let state = self.begin("list_servers".to_string(), "servers")?;
        Ok(state.servers.clone())
    }
}

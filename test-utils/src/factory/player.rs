//! Player factory for creating AGDB player records.

use serde_json::{json, Value};

use crate::factory::helpers::{next_id, STEAM_ID_BASE};

/// Factory for AGDB player JSON with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new()
///     .steam_id("76561198000000001")
///     .nicknames(["first", "second"])
///     .banned("Teamkilling")
///     .build();
/// ```
pub struct PlayerFactory {
    steam_id: String,
    name: String,
    country: Option<String>,
    related_ids: Vec<String>,
    is_banned: bool,
    ban_reason: Option<String>,
    nicknames: Vec<String>,
    creation_time: Option<i64>,
    latest_activity: Option<i64>,
}

impl PlayerFactory {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - steam_id: unique ID in the individual Steam ID range
    /// - name: `"Player {n}"`
    /// - not banned, no related IDs, no nicknames, no timestamps
    pub fn new() -> Self {
        let n = next_id();
        Self {
            steam_id: (STEAM_ID_BASE + n).to_string(),
            name: format!("Player {}", n),
            country: None,
            related_ids: Vec::new(),
            is_banned: false,
            ban_reason: None,
            nicknames: Vec::new(),
            creation_time: None,
            latest_activity: None,
        }
    }

    pub fn steam_id(mut self, steam_id: impl Into<String>) -> Self {
        self.steam_id = steam_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn related_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn nicknames<I, S>(mut self, nicknames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nicknames = nicknames.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the player as banned with the given reason.
    pub fn banned(mut self, reason: impl Into<String>) -> Self {
        self.is_banned = true;
        self.ban_reason = Some(reason.into());
        self
    }

    /// Sets account creation and latest activity as unix seconds.
    pub fn activity(mut self, creation_time: i64, latest_activity: i64) -> Self {
        self.creation_time = Some(creation_time);
        self.latest_activity = Some(latest_activity);
        self
    }

    /// Steam ID the built record will carry.
    pub fn id(&self) -> &str {
        &self.steam_id
    }

    /// Builds the player record as AGDB serves it from `GET /players/{id}`.
    pub fn build(self) -> Value {
        json!({
            "steamName": self.name,
            "steamID": self.steam_id,
            "steamUrl": format!("https://steamcommunity.com/profiles/{}", self.steam_id),
            "country": self.country,
            "relatedSteamIDs": self.related_ids,
            "avatar": format!("https://avatars.steamstatic.com/{}_full.jpg", self.steam_id),
            "creationTime": self.creation_time,
            "latestActivity": self.latest_activity,
            "isBanned": self.is_banned,
            "banReason": self.ban_reason,
            "nicknames": self.nicknames,
        })
    }
}

impl Default for PlayerFactory {
    fn default() -> Self {
        Self::new()
    }
}

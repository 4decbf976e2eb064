//! Player records returned by the AGDB player directory.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Snapshot of a player as reported by the AGDB API.
///
/// Every fetch produces a fresh snapshot; nothing in the bot mutates or caches
/// these values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Player {
    /// Steam display name.
    #[serde(rename = "steamName")]
    pub display_name: String,
    /// 64-bit Steam ID, the player's identity in AGDB.
    #[serde(rename = "steamID")]
    pub steam_id: String,
    /// Link to the Steam profile.
    #[serde(rename = "steamUrl")]
    pub profile_url: String,
    /// Two-letter country code, if Steam exposes one.
    #[serde(default)]
    pub country: Option<String>,
    /// Other Steam IDs AGDB links to this player. Never contains `steam_id`.
    #[serde(rename = "relatedSteamIDs", default)]
    pub related_ids: Vec<String>,
    #[serde(rename = "avatar")]
    pub avatar_url: String,
    #[serde(
        rename = "creationTime",
        default,
        with = "chrono::serde::ts_seconds_option"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "latestActivity",
        default,
        with = "chrono::serde::ts_seconds_option"
    )]
    pub last_active_at: Option<DateTime<Utc>>,
    #[serde(rename = "isBanned")]
    pub is_banned: bool,
    #[serde(rename = "banReason", default)]
    pub ban_reason: Option<String>,
    /// Known nicknames in the order AGDB returns them.
    #[serde(default)]
    pub nicknames: Vec<String>,
}

/// Response body of the ban and unban endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModerationResult {
    #[serde(rename = "steamID")]
    pub steam_id: String,
    /// Human readable confirmation from AGDB.
    pub message: String,
}

/// Which moderation action a request performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Ban,
    Unban,
}

impl ModerationAction {
    /// Past-tense verb used in notification titles.
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Ban => "Banned",
            Self::Unban => "Unbanned",
        }
    }

    /// Infinitive used in failure messages ("Failed to ban player").
    pub fn verb(self) -> &'static str {
        match self {
            Self::Ban => "ban",
            Self::Unban => "unban",
        }
    }
}

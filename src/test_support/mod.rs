//! Recording fakes for the seams between services and the outside world.
//!
//! The HTTP client itself is tested against the fake API in `test-utils`; these
//! in-memory fakes let service and dispatcher tests count calls and inspect
//! every notice without any network.

mod directory;
mod discord;

pub use directory::FakeDirectory;
pub use discord::{FakeRoleLookup, FakeRosterChannel, RecordingResponder, ResponderEvent};

use crate::model::player::Player;

/// Builds an unbanned player with no related IDs or nicknames.
pub fn player(steam_id: &str) -> Player {
    Player {
        display_name: format!("Player {}", steam_id),
        steam_id: steam_id.to_string(),
        profile_url: format!("https://steamcommunity.com/profiles/{}", steam_id),
        country: None,
        related_ids: Vec::new(),
        avatar_url: format!("https://avatars.steamstatic.com/{}_full.jpg", steam_id),
        created_at: None,
        last_active_at: None,
        is_banned: false,
        ban_reason: None,
        nicknames: Vec::new(),
    }
}

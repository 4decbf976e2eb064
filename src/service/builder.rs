//! Notice construction for player lookups and moderation.
//!
//! These helpers keep the formatting of player summaries identical between the
//! info reply and the ban log, so moderators see the same layout everywhere.

use crate::model::{
    notice::{Notice, NoticeEmbed, COLOR_GREEN, COLOR_RED},
    player::{ModerationAction, ModerationResult, Player},
};

/// Maximum number of nicknames shown in any player summary.
pub const MAX_NICKNAMES: usize = 5;

/// Placeholder for empty list or missing values.
const NOT_AVAILABLE: &str = "N/A";

/// Joins the first `MAX_NICKNAMES` nicknames in upstream order.
///
/// # Returns
/// - Comma-separated nicknames, or `N/A` when there are none
pub fn format_nicknames(nicknames: &[String]) -> String {
    if nicknames.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    nicknames
        .iter()
        .take(MAX_NICKNAMES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Joins related Steam IDs, or `N/A` when there are none.
pub fn format_related_ids(ids: &[String]) -> String {
    if ids.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        ids.join(", ")
    }
}

/// Ban reason shown for a player; only present while the player is banned.
pub fn format_ban_reason(player: &Player) -> String {
    match (&player.ban_reason, player.is_banned) {
        (Some(reason), true) => reason.clone(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Country flag used as embed author icon.
fn flag_url(player: &Player) -> Option<String> {
    // TODO: replace osu! flags with a self-hosted flag set
    player
        .country
        .as_ref()
        .map(|country| format!("https://assets.ppy.sh/old-flags/{}.png", country))
}

fn player_embed(player: &Player, author_name: String, body: String, color: u32) -> NoticeEmbed {
    NoticeEmbed {
        author_name,
        author_url: Some(player.profile_url.clone()),
        author_icon_url: flag_url(player),
        thumbnail_url: Some(player.avatar_url.clone()),
        body,
        color,
    }
}

/// Builds the reply for the `info` command.
pub fn player_info(player: &Player) -> Notice {
    let mut body = format!(
        "▸ **SteamID:** {}\n\
         ▸ **Related SteamIDs:** {}\n\
         ▸ **Banned:** {}\n\
         ▸ **Ban reason:** {}\n\
         ▸ **Nicknames:** {}\n",
        player.steam_id,
        format_related_ids(&player.related_ids),
        if player.is_banned { "True" } else { "False" },
        format_ban_reason(player),
        format_nicknames(&player.nicknames),
    );

    if let Some(last_active_at) = player.last_active_at {
        body.push_str(&format!(
            "▸ **Last activity:** <t:{}:R>\n",
            last_active_at.timestamp()
        ));
    }

    Notice::embed(player_embed(
        player,
        format!("Player Information for {}", player.display_name),
        body,
        COLOR_GREEN,
    ))
}

/// Builds the requester confirmation of a ban or unban.
pub fn moderation_confirmation(action: ModerationAction, result: &ModerationResult) -> Notice {
    let color = match action {
        ModerationAction::Ban => COLOR_RED,
        ModerationAction::Unban => COLOR_GREEN,
    };

    Notice::embed(NoticeEmbed {
        author_name: format!("Player {}: {}", action.past_tense(), result.steam_id),
        body: result.message.clone(),
        color,
        ..Default::default()
    })
}

/// Builds the ban log record of a ban or unban from the refreshed player.
///
/// Ban records show the reason the moderator gave, but only while the refreshed
/// player is actually banned; AGDB does not have to echo the reason back. Unban
/// records leave the line out.
pub fn audit_record(action: ModerationAction, player: &Player, reason: Option<&str>) -> Notice {
    let (color, reason_line) = match action {
        ModerationAction::Ban => {
            let shown = match reason {
                Some(reason) if player.is_banned => reason,
                _ => NOT_AVAILABLE,
            };
            (COLOR_RED, format!("▸ **Ban reason:** {}\n", shown))
        }
        ModerationAction::Unban => (COLOR_GREEN, String::new()),
    };

    let body = format!(
        "▸ **SteamID:** {}\n\
         ▸ **Related SteamIDs:** {}\n\
         {}\
         ▸ **Nicknames:** {}\n",
        player.steam_id,
        format_related_ids(&player.related_ids),
        reason_line,
        format_nicknames(&player.nicknames),
    );

    Notice::embed(player_embed(
        player,
        format!(
            "A player has been AGDB {}: {}",
            action.past_tense().to_lowercase(),
            player.display_name
        ),
        body,
        color,
    ))
}

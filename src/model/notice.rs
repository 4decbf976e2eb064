//! Platform-neutral outgoing messages.
//!
//! Services describe what to say with a `Notice`; the Discord layer turns it into
//! serenity builders (`CreateEmbed`, followups, channel messages).

/// `discord.Color.green()`
pub const COLOR_GREEN: u32 = 0x2ECC71;
/// `discord.Color.red()`
pub const COLOR_RED: u32 = 0xE74C3C;

/// A message to deliver to the requester or to a channel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Notice {
    /// Plain message content.
    pub content: Option<String>,
    /// Optional rich embed.
    pub embed: Option<NoticeEmbed>,
    /// Only visible to the requester. Ignored for channel messages.
    pub ephemeral: bool,
}

impl Notice {
    /// Plain text notice visible to everyone in the channel.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Plain text notice only the requester can see.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ephemeral: true,
            ..Default::default()
        }
    }

    /// Embed-only notice.
    pub fn embed(embed: NoticeEmbed) -> Self {
        Self {
            embed: Some(embed),
            ..Default::default()
        }
    }
}

/// Embed contents, mirroring the subset of Discord embeds the bot uses.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoticeEmbed {
    pub author_name: String,
    pub author_url: Option<String>,
    pub author_icon_url: Option<String>,
    pub thumbnail_url: Option<String>,
    /// Body rendered as a single unnamed field.
    pub body: String,
    pub color: u32,
}

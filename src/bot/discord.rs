//! Serenity implementations of the service seams.
//!
//! Everything that actually talks to Discord lives here; the services only see
//! `ChatNotifier`, `CommandResponder`, `RoleLookup` and `RosterChannel`.

use serenity::all::{
    ChannelId, CommandInteraction, CreateEmbed, CreateEmbedAuthor, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, CreateMessage,
    EditMessage, GetMessages, GuildId, MessageId, UserId,
};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::auth::RoleLookup,
    model::{
        notice::{Notice, NoticeEmbed},
        roster::ChannelMessage,
    },
    service::{
        notifier::{ChatNotifier, CommandResponder},
        roster::RosterChannel,
    },
};

fn to_embed(embed: &NoticeEmbed) -> CreateEmbed {
    let mut author = CreateEmbedAuthor::new(&embed.author_name);
    if let Some(url) = &embed.author_url {
        author = author.url(url);
    }
    if let Some(icon_url) = &embed.author_icon_url {
        author = author.icon_url(icon_url);
    }

    let mut built = CreateEmbed::new()
        .author(author)
        .field("", &embed.body, false)
        .color(embed.color);
    if let Some(thumbnail) = &embed.thumbnail_url {
        built = built.thumbnail(thumbnail);
    }

    built
}

/// Answers one slash command interaction and posts to the ban log channel.
pub struct InteractionResponder {
    http: Arc<Http>,
    interaction: CommandInteraction,
    audit_channel: ChannelId,
}

impl InteractionResponder {
    pub fn new(http: Arc<Http>, interaction: CommandInteraction, audit_channel: ChannelId) -> Self {
        Self {
            http,
            interaction,
            audit_channel,
        }
    }
}

#[async_trait]
impl ChatNotifier for InteractionResponder {
    async fn reply(&self, notice: Notice) -> Result<(), AppError> {
        let mut followup = CreateInteractionResponseFollowup::new().ephemeral(notice.ephemeral);
        if let Some(content) = notice.content {
            followup = followup.content(content);
        }
        if let Some(embed) = &notice.embed {
            followup = followup.embed(to_embed(embed));
        }

        self.interaction
            .create_followup(&self.http, followup)
            .await?;

        Ok(())
    }

    async fn audit(&self, notice: Notice) -> Result<(), AppError> {
        let mut message = CreateMessage::new();
        if let Some(content) = notice.content {
            message = message.content(content);
        }
        if let Some(embed) = &notice.embed {
            message = message.embed(to_embed(embed));
        }

        self.audit_channel
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl CommandResponder for InteractionResponder {
    async fn defer(&self) -> Result<(), AppError> {
        self.interaction
            .create_response(
                &self.http,
                CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new()),
            )
            .await?;

        Ok(())
    }

    async fn respond(&self, notice: Notice) -> Result<(), AppError> {
        let mut message = CreateInteractionResponseMessage::new().ephemeral(notice.ephemeral);
        if let Some(content) = notice.content {
            message = message.content(content);
        }
        if let Some(embed) = &notice.embed {
            message = message.embed(to_embed(embed));
        }

        self.interaction
            .create_response(&self.http, CreateInteractionResponse::Message(message))
            .await?;

        Ok(())
    }
}

/// Resolves member roles over the Discord HTTP API.
///
/// Uses HTTP instead of the gateway cache so the `GUILD_MEMBERS` privileged intent
/// is not needed.
pub struct HttpRoleLookup {
    http: Arc<Http>,
}

impl HttpRoleLookup {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RoleLookup for HttpRoleLookup {
    async fn member_roles(&self, guild_id: u64, user_id: u64) -> Result<Vec<u64>, AuthError> {
        let member = self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await
            .map_err(|e| AuthError::MemberLookup {
                user_id,
                guild_id,
                reason: e.to_string(),
            })?;

        Ok(member.roles.iter().map(|role| role.get()).collect())
    }
}

/// The server list channel.
pub struct DiscordRosterChannel {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl DiscordRosterChannel {
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
        }
    }
}

#[async_trait]
impl RosterChannel for DiscordRosterChannel {
    async fn bot_user_id(&self) -> Result<u64, AppError> {
        let user = self.http.get_current_user().await?;

        Ok(user.id.get())
    }

    async fn recent_messages(&self, limit: u8) -> Result<Vec<ChannelMessage>, AppError> {
        let messages = self
            .channel_id
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;

        Ok(messages
            .iter()
            .map(|message| ChannelMessage {
                id: message.id.get(),
                author_id: message.author.id.get(),
            })
            .collect())
    }

    async fn edit(&self, message_id: u64, content: &str) -> Result<(), AppError> {
        self.channel_id
            .edit_message(
                &self.http,
                MessageId::new(message_id),
                EditMessage::new().content(content),
            )
            .await?;

        Ok(())
    }

    async fn send(&self, content: &str) -> Result<u64, AppError> {
        let message = self
            .channel_id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(message.id.get())
    }
}

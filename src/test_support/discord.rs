use serenity::async_trait;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use crate::{
    error::{auth::AuthError, AppError},
    middleware::auth::RoleLookup,
    model::{notice::Notice, roster::ChannelMessage},
    service::{
        notifier::{ChatNotifier, CommandResponder},
        roster::RosterChannel,
    },
};

/// Something a `RecordingResponder` was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponderEvent {
    Deferred,
    Responded(Notice),
    Replied(Notice),
    Audited(Notice),
}

/// `CommandResponder` that records events instead of talking to Discord.
#[derive(Default)]
pub struct RecordingResponder {
    events: Mutex<Vec<ResponderEvent>>,
    fail_audit: bool,
}

impl RecordingResponder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audit channel sends fail after being recorded.
    pub fn failing_audit() -> Self {
        Self {
            fail_audit: true,
            ..Default::default()
        }
    }

    pub fn events(&self) -> Vec<ResponderEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn replies(&self) -> Vec<Notice> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ResponderEvent::Replied(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    pub fn audits(&self) -> Vec<Notice> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ResponderEvent::Audited(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    pub fn responses(&self) -> Vec<Notice> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ResponderEvent::Responded(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ResponderEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ChatNotifier for RecordingResponder {
    async fn reply(&self, notice: Notice) -> Result<(), AppError> {
        self.push(ResponderEvent::Replied(notice));
        Ok(())
    }

    async fn audit(&self, notice: Notice) -> Result<(), AppError> {
        self.push(ResponderEvent::Audited(notice));
        if self.fail_audit {
            return Err(AppError::NotFound("Unknown Channel".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CommandResponder for RecordingResponder {
    async fn defer(&self) -> Result<(), AppError> {
        self.push(ResponderEvent::Deferred);
        Ok(())
    }

    async fn respond(&self, notice: Notice) -> Result<(), AppError> {
        self.push(ResponderEvent::Responded(notice));
        Ok(())
    }
}

/// `RoleLookup` backed by a fixed user → roles map.
///
/// Users missing from the map are reported as not being guild members.
#[derive(Default)]
pub struct FakeRoleLookup {
    members: HashMap<u64, Vec<u64>>,
    calls: AtomicUsize,
}

impl FakeRoleLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, user_id: u64, roles: Vec<u64>) -> Self {
        self.members.insert(user_id, roles);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoleLookup for FakeRoleLookup {
    async fn member_roles(&self, guild_id: u64, user_id: u64) -> Result<Vec<u64>, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.members
            .get(&user_id)
            .cloned()
            .ok_or_else(|| AuthError::MemberLookup {
                user_id,
                guild_id,
                reason: "Unknown Member".to_string(),
            })
    }
}

#[derive(Debug, Clone)]
struct StoredMessage {
    meta: ChannelMessage,
    content: String,
}

/// In-memory channel for roster tests. Messages are kept newest first, like
/// Discord returns channel history.
pub struct FakeRosterChannel {
    bot_user_id: u64,
    messages: Mutex<Vec<StoredMessage>>,
    next_id: AtomicUsize,
    sends: AtomicUsize,
    edits: AtomicUsize,
    history_unavailable: bool,
}

impl FakeRosterChannel {
    pub fn new(bot_user_id: u64) -> Self {
        Self {
            bot_user_id,
            messages: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1_000),
            sends: AtomicUsize::new(0),
            edits: AtomicUsize::new(0),
            history_unavailable: false,
        }
    }

    /// History reads fail as if Discord were unreachable.
    pub fn history_unavailable(mut self) -> Self {
        self.history_unavailable = true;
        self
    }

    /// Adds a message by `author_id` as the newest message of the channel.
    pub fn post(&self, author_id: u64, content: &str) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as u64;
        self.messages.lock().unwrap().insert(
            0,
            StoredMessage {
                meta: ChannelMessage { id, author_id },
                content: content.to_string(),
            },
        );
        id
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    pub fn content_of(&self, message_id: u64) -> Option<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.meta.id == message_id)
            .map(|m| m.content.clone())
    }

    pub fn sends(&self) -> usize {
        self.sends.load(Ordering::SeqCst)
    }

    pub fn edits(&self) -> usize {
        self.edits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RosterChannel for FakeRosterChannel {
    async fn bot_user_id(&self) -> Result<u64, AppError> {
        Ok(self.bot_user_id)
    }

    async fn recent_messages(&self, limit: u8) -> Result<Vec<ChannelMessage>, AppError> {
        if self.history_unavailable {
            return Err(AppError::NotFound("Unknown Channel".to_string()));
        }

        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .take(limit as usize)
            .map(|m| m.meta)
            .collect())
    }

    async fn edit(&self, message_id: u64, content: &str) -> Result<(), AppError> {
        let mut messages = self.messages.lock().unwrap();
        let message = messages
            .iter_mut()
            .find(|m| m.meta.id == message_id)
            .ok_or_else(|| AppError::NotFound("Unknown Message".to_string()))?;
        message.content = content.to_string();
        self.edits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn send(&self, content: &str) -> Result<u64, AppError> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        Ok(self.post(self.bot_user_id, content))
    }
}

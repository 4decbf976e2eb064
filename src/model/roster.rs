//! Channel message metadata used by the roster reconciler.

/// Minimal view of a message in channel history.
///
/// Only the fields needed to identify the bot's own roster message are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMessage {
    pub id: u64,
    pub author_id: u64,
}

/// What a roster reconciliation cycle did to the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterOutcome {
    /// An existing bot-authored message was edited in place.
    Edited { message_id: u64 },
    /// No bot-authored message was in the lookback window, so a new one was sent.
    Created { message_id: u64 },
}

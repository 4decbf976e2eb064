//! Server roster reconciliation.
//!
//! Keeps a single bot-authored message in the server list channel in sync with
//! AGDB's list of registered servers. The message is not tracked by ID; each cycle
//! searches the most recent `SERVERLIST_LOOKBACK` messages for one written by the
//! bot and edits it, or sends a new one when none is found. A roster message that
//! has scrolled out of the lookback window is therefore not found again and a
//! second one gets posted.

use serenity::async_trait;

use crate::{
    config::SERVERLIST_LOOKBACK,
    data::player_directory::PlayerDirectory,
    error::AppError,
    model::{
        roster::{ChannelMessage, RosterOutcome},
        server::ServerEntry,
    },
};

/// The channel holding the roster message.
#[async_trait]
pub trait RosterChannel: Send + Sync {
    /// Discord ID of the bot's own user.
    async fn bot_user_id(&self) -> Result<u64, AppError>;

    /// Most recent messages of the channel, newest first.
    async fn recent_messages(&self, limit: u8) -> Result<Vec<ChannelMessage>, AppError>;

    /// Replaces the content of an existing message.
    async fn edit(&self, message_id: u64, content: &str) -> Result<(), AppError>;

    /// Sends a new message and returns its ID.
    async fn send(&self, content: &str) -> Result<u64, AppError>;
}

const ROSTER_PREAMBLE: &str = "*Please note: Some servers may not be displayed. The server list is updated automatically every 10 minutes, so it might not reflect all servers at the moment.*\n\nHere are some of the servers currently using AGDB\n\n";

/// Renders the roster message body.
///
/// One header line with the server count, then a line pair per server in the order
/// AGDB returned them. Line breaks inside server fields are flattened so each server
/// always occupies exactly two lines.
pub fn render_roster(servers: &[ServerEntry]) -> String {
    let mut content = String::from(ROSTER_PREAMBLE);
    content.push_str(&format!(
        "**Servers using AGDB** (Server count: {})\n",
        servers.len()
    ));

    for server in servers {
        content.push_str(&format!(
            "- {} (AGDB v{})\n",
            single_line(&server.name),
            single_line(&server.software_version)
        ));
        content.push_str(&format!("  - IP: {}\n", single_line(&server.address)));
    }

    content
}

fn single_line(value: &str) -> String {
    value.replace(['\r', '\n'], " ")
}

pub struct RosterService<'a> {
    directory: &'a dyn PlayerDirectory,
    channel: &'a dyn RosterChannel,
}

impl<'a> RosterService<'a> {
    pub fn new(directory: &'a dyn PlayerDirectory, channel: &'a dyn RosterChannel) -> Self {
        Self { directory, channel }
    }

    /// Runs one reconciliation cycle.
    ///
    /// A failure to fetch the server list aborts the cycle before the channel is
    /// touched, leaving the previous roster in place.
    ///
    /// # Returns
    /// - `Ok(RosterOutcome::Edited)` - Existing roster message updated
    /// - `Ok(RosterOutcome::Created)` - No roster message in the lookback window, new one sent
    /// - `Err(AppError)` - AGDB or Discord failure
    pub async fn reconcile(&self) -> Result<RosterOutcome, AppError> {
        let servers = self.directory.list_servers().await?;
        let content = render_roster(&servers);

        let bot_user_id = self.channel.bot_user_id().await?;
        let recent = self.channel.recent_messages(SERVERLIST_LOOKBACK).await?;

        match recent.iter().find(|m| m.author_id == bot_user_id) {
            Some(existing) => {
                self.channel.edit(existing.id, &content).await?;
                tracing::debug!(
                    "Edited server list message {} ({} servers)",
                    existing.id,
                    servers.len()
                );
                Ok(RosterOutcome::Edited {
                    message_id: existing.id,
                })
            }
            None => {
                let message_id = self.channel.send(&content).await?;
                tracing::info!(
                    "Posted new server list message {} ({} servers)",
                    message_id,
                    servers.len()
                );
                Ok(RosterOutcome::Created { message_id })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeDirectory, FakeRosterChannel};

    const BOT: u64 = 9000;

    fn servers(count: usize) -> Vec<ServerEntry> {
        (0..count)
            .map(|i| ServerEntry {
                id: i as i64,
                address: format!("10.0.0.{}:7777", i),
                name: format!("Server {}", i),
                software_version: "2.1.0".to_string(),
            })
            .collect()
    }

    /// Tests the rendered body for several list sizes.
    ///
    /// Expected: header count N and exactly N line pairs, in upstream order
    #[test]
    fn render_has_one_line_pair_per_server() {
        for count in [0, 1, 50] {
            let body = render_roster(&servers(count));

            assert!(body.contains(&format!("(Server count: {})", count)));

            let lines: Vec<_> = body.lines().collect();
            let name_lines: Vec<_> = lines.iter().filter(|l| l.starts_with("- ")).collect();
            let ip_lines: Vec<_> = lines.iter().filter(|l| l.starts_with("  - IP: ")).collect();
            assert_eq!(name_lines.len(), count);
            assert_eq!(ip_lines.len(), count);

            for (i, line) in name_lines.iter().enumerate() {
                assert_eq!(**line, format!("- Server {} (AGDB v2.1.0)", i));
            }
        }
    }

    /// Tests each server's address follows its name line.
    #[test]
    fn render_pairs_address_with_name() {
        let body = render_roster(&servers(2));
        let lines: Vec<_> = body.lines().collect();
        let first = lines.iter().position(|l| *l == "- Server 0 (AGDB v2.1.0)").unwrap();

        assert_eq!(lines[first + 1], "  - IP: 10.0.0.0:7777");
        assert_eq!(lines[first + 2], "- Server 1 (AGDB v2.1.0)");
    }

    /// Tests a server name with a line break cannot add lines.
    #[test]
    fn render_flattens_line_breaks() {
        let mut list = servers(1);
        list[0].name = "Evil\n- Fake (AGDB v9)".to_string();

        let body = render_roster(&list);

        assert_eq!(body.lines().filter(|l| l.starts_with("- ")).count(), 1);
    }

    /// Tests the first cycle in an empty channel.
    ///
    /// Expected: one new message, then later cycles edit it
    #[tokio::test]
    async fn creates_once_then_edits() {
        let directory = FakeDirectory::new().with_servers(servers(2));
        let channel = FakeRosterChannel::new(BOT);
        let service = RosterService::new(&directory, &channel);

        let first = service.reconcile().await.unwrap();
        let RosterOutcome::Created { message_id } = first else {
            panic!("expected a new message, got {:?}", first);
        };

        directory.set_servers(servers(3));
        let second = service.reconcile().await.unwrap();

        assert_eq!(second, RosterOutcome::Edited { message_id });
        assert_eq!(channel.message_count(), 1);
        assert_eq!(channel.sends(), 1);
        assert!(channel
            .content_of(message_id)
            .unwrap()
            .contains("(Server count: 3)"));
    }

    /// Tests an existing roster message buried under other users' messages.
    ///
    /// Expected: the bot message is edited in place, no message is added
    #[tokio::test]
    async fn edits_existing_message_within_window() {
        let directory = FakeDirectory::new().with_servers(servers(1));
        let channel = FakeRosterChannel::new(BOT);
        let existing = channel.post(BOT, "old roster");
        for _ in 0..20 {
            channel.post(1, "chatter");
        }
        let before = channel.message_count();

        let outcome = RosterService::new(&directory, &channel)
            .reconcile()
            .await
            .unwrap();

        assert_eq!(outcome, RosterOutcome::Edited { message_id: existing });
        assert_eq!(channel.message_count(), before);
        assert_eq!(channel.sends(), 0);
    }

    /// Tests a roster message older than the lookback window.
    ///
    /// Expected: a second roster message is posted
    #[tokio::test]
    async fn message_outside_window_is_not_found() {
        let directory = FakeDirectory::new().with_servers(servers(1));
        let channel = FakeRosterChannel::new(BOT);
        channel.post(BOT, "old roster");
        for _ in 0..SERVERLIST_LOOKBACK {
            channel.post(1, "chatter");
        }

        let outcome = RosterService::new(&directory, &channel)
            .reconcile()
            .await
            .unwrap();

        assert!(matches!(outcome, RosterOutcome::Created { .. }));
        assert_eq!(channel.sends(), 1);
    }

    /// Tests AGDB being down.
    ///
    /// Expected: Err, channel untouched
    #[tokio::test]
    async fn fetch_failure_leaves_channel_untouched() {
        let directory = FakeDirectory::new().with_servers(servers(1)).unavailable();
        let channel = FakeRosterChannel::new(BOT);
        let existing = channel.post(BOT, "old roster");

        let result = RosterService::new(&directory, &channel).reconcile().await;

        assert!(result.is_err());
        assert_eq!(channel.edits(), 0);
        assert_eq!(channel.sends(), 0);
        assert_eq!(channel.content_of(existing).as_deref(), Some("old roster"));
    }

    /// Tests a failed history read.
    ///
    /// Expected: Err and no message sent, so no duplicate appears
    #[tokio::test]
    async fn history_failure_does_not_post() {
        let directory = FakeDirectory::new().with_servers(servers(1));
        let channel = FakeRosterChannel::new(BOT).history_unavailable();

        let result = RosterService::new(&directory, &channel).reconcile().await;

        assert!(result.is_err());
        assert_eq!(channel.sends(), 0);
    }

    /// Tests recovery on the cycle after a failure.
    #[tokio::test]
    async fn next_cycle_recovers_after_failure() {
        let directory = FakeDirectory::new().with_servers(servers(1)).unavailable();
        let channel = FakeRosterChannel::new(BOT);
        let service = RosterService::new(&directory, &channel);

        assert!(service.reconcile().await.is_err());

        directory.set_unavailable(false);
        assert!(matches!(
            service.reconcile().await.unwrap(),
            RosterOutcome::Created { .. }
        ));
    }
}

use std::time::Duration;

use crate::{
    context::TestContext,
    error::TestError,
    factory::{player::PlayerFactory, server::ServerFactory},
    fake_api::{FakeApi, FakeState},
};

/// Builder for creating a fake AGDB API with seeded data.
///
/// Provides a fluent interface for seeding players and servers and configuring
/// failure modes, then call `build()` to start serving on an ephemeral port.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .master_key("secret")
///     .with_player(PlayerFactory::new().steam_id("76561198000000001"))
///     .with_server(ServerFactory::new().name("EU #1"))
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    state: FakeState,
}

impl TestBuilder {
    /// Creates a new test builder with no players, no servers, and master key `"master"`.
    pub fn new() -> Self {
        Self {
            state: FakeState {
                master_key: "master".to_string(),
                ..Default::default()
            },
        }
    }

    /// Sets the master key the ban and unban routes accept.
    pub fn master_key(mut self, key: impl Into<String>) -> Self {
        self.state.master_key = key.into();
        self
    }

    /// Seeds a player record.
    pub fn with_player(mut self, player: PlayerFactory) -> Self {
        let steam_id = player.id().to_string();
        self.state.players.insert(steam_id, player.build());
        self
    }

    /// Appends a server to the server list. Order of calls is the list order.
    pub fn with_server(mut self, server: ServerFactory) -> Self {
        self.state.servers.push(server.build());
        self
    }

    /// Answers every route with the given status code.
    pub fn fail_with_status(mut self, status: u16) -> Self {
        self.state.failure = Some(status);
        self
    }

    /// Answers every route with a 200 whose body is not JSON.
    pub fn malformed_bodies(mut self) -> Self {
        self.state.malformed = true;
        self
    }

    /// Delays every response, used to trigger client timeouts.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.state.delay = Some(delay);
        self
    }

    /// Starts the fake API on `127.0.0.1` with an ephemeral port.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running fake API
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn build(self) -> Result<TestContext, TestError> {
        let api = FakeApi::new(self.state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let router = api.router();

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(TestContext::new(format!("http://{}/", addr), api))
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use serde_json::Value;

use crate::fake_api::{FakeApi, RecordedRequest};

/// Running fake AGDB API.
///
/// The server task lives on the test's tokio runtime and stops with it.
pub struct TestContext {
    /// Base URL of the fake API, e.g. `http://127.0.0.1:40123/`.
    pub base_url: String,

    api: FakeApi,
}

impl TestContext {
    pub fn new(base_url: String, api: FakeApi) -> Self {
        Self { base_url, api }
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.api.state().requests.clone()
    }

    /// Current upstream record of a player.
    pub fn player(&self, steam_id: &str) -> Option<Value> {
        self.api.state().players.get(steam_id).cloned()
    }

    /// Replaces the server list served by `GET /servers`.
    pub fn set_servers(&self, servers: Vec<Value>) {
        self.api.state().servers = servers;
    }

    /// Forces every route to answer with `status`, or restores normal behavior.
    pub fn set_failure(&self, status: Option<u16>) {
        self.api.state().failure = status;
    }
}

//! Server factory for creating AGDB server list records.

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Factory for entries of AGDB's server list.
pub struct ServerFactory {
    id: u64,
    address: String,
    name: String,
    version: String,
}

impl ServerFactory {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - address: `"10.0.{n / 256}.{n % 256}:7777"`
    /// - name: `"Server {n}"`
    /// - version: `"1.0.0"`
    pub fn new() -> Self {
        let n = next_id();
        Self {
            id: n,
            address: format!("10.0.{}.{}:7777", (n / 256) % 256, n % 256),
            name: format!("Server {}", n),
            version: "1.0.0".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "ipPort": self.address,
            "serverName": self.name,
            "agdbVersion": self.version,
        })
    }
}

impl Default for ServerFactory {
    fn default() -> Self {
        Self::new()
    }
}

//! Game servers registered with AGDB.

use serde::Deserialize;

/// One externally registered game server, re-fetched every roster cycle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerEntry {
    pub id: i64,
    /// `ip:port` the server listens on.
    #[serde(rename = "ipPort")]
    pub address: String,
    #[serde(rename = "serverName")]
    pub name: String,
    /// AGDB plugin version the server runs.
    #[serde(rename = "agdbVersion")]
    pub software_version: String,
}

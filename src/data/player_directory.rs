//! AGDB player directory client.
//!
//! Every call is a single attempt. The request timeout is configured on the
//! `reqwest::Client` handed to the constructor; a timed out or failed request is
//! reported as unavailable and never collapsed into "not found".

use reqwest::{RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serenity::async_trait;
use url::Url;

use crate::{
    error::directory::DirectoryError,
    model::{
        player::{ModerationResult, Player},
        server::ServerEntry,
    },
};

/// Header carrying the privileged AGDB credential on write endpoints.
const MASTER_KEY_HEADER: &str = "master-Key";

/// Operations the bot performs against the player directory.
#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    /// Fetches the current record of a player.
    ///
    /// # Returns
    /// - `Ok(Player)` - Fresh snapshot of the player
    /// - `Err(DirectoryError::NotFound)` - AGDB does not know the Steam ID
    /// - `Err(_)` - AGDB unavailable
    async fn lookup(&self, steam_id: &str) -> Result<Player, DirectoryError>;

    /// Bans a player with the given reason.
    async fn ban(&self, steam_id: &str, reason: &str) -> Result<ModerationResult, DirectoryError>;

    /// Lifts a player's ban.
    async fn unban(&self, steam_id: &str) -> Result<ModerationResult, DirectoryError>;

    /// Lists the game servers registered with AGDB, in upstream order.
    async fn list_servers(&self) -> Result<Vec<ServerEntry>, DirectoryError>;
}

#[derive(Serialize)]
struct BanRequest<'a> {
    reason: &'a str,
}

/// HTTP implementation of `PlayerDirectory`.
///
/// Cheap to clone; `reqwest::Client` shares its connection pool between clones.
#[derive(Clone)]
pub struct PlayerDirectoryClient {
    http: reqwest::Client,
    base_url: Url,
    master_key: String,
}

impl PlayerDirectoryClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// - `http` - HTTP client, expected to carry the request timeout
    /// - `base_url` - AGDB API root, e.g. `https://api.agdb.example/`
    /// - `master_key` - Privileged credential for ban and unban
    pub fn new(http: reqwest::Client, base_url: Url, master_key: String) -> Self {
        Self {
            http,
            base_url,
            master_key,
        }
    }

    /// Builds an endpoint URL below the base URL.
    ///
    /// Segments are percent-encoded, so a Steam ID can never escape its path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, DirectoryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DirectoryError::InvalidUrl {
                endpoint: segments.join("/"),
                base_url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Sends a request and decodes a JSON body.
    ///
    /// # Arguments
    /// - `endpoint` - Endpoint path used in errors and logs
    /// - `request` - Prepared request
    /// - `steam_id` - Player the route addresses; a 404 maps to `NotFound` only
    ///   when this is set
    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: String,
        request: RequestBuilder,
        steam_id: Option<&str>,
    ) -> Result<T, DirectoryError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => {
                if source.is_timeout() {
                    tracing::warn!("AGDB request to {} timed out", endpoint);
                }
                return Err(DirectoryError::Request { endpoint, source });
            }
        };

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            if let Some(steam_id) = steam_id {
                return Err(DirectoryError::NotFound(steam_id.to_string()));
            }
        }

        if !status.is_success() {
            return Err(DirectoryError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| DirectoryError::Request { endpoint, source })
    }
}

#[async_trait]
impl PlayerDirectory for PlayerDirectoryClient {
    async fn lookup(&self, steam_id: &str) -> Result<Player, DirectoryError> {
        let url = self.endpoint(&["players", steam_id])?;
        let endpoint = format!("players/{}", steam_id);

        tracing::debug!("Looking up player {}", steam_id);

        self.send(endpoint, self.http.get(url), Some(steam_id)).await
    }

    async fn ban(&self, steam_id: &str, reason: &str) -> Result<ModerationResult, DirectoryError> {
        let url = self.endpoint(&["players", "ban", steam_id])?;
        let endpoint = format!("players/ban/{}", steam_id);

        let request = self
            .http
            .post(url)
            .header(MASTER_KEY_HEADER, &self.master_key)
            .json(&BanRequest { reason });

        self.send(endpoint, request, Some(steam_id)).await
    }

    async fn unban(&self, steam_id: &str) -> Result<ModerationResult, DirectoryError> {
        let url = self.endpoint(&["players", "unban", steam_id])?;
        let endpoint = format!("players/unban/{}", steam_id);

        let request = self
            .http
            .post(url)
            .header(MASTER_KEY_HEADER, &self.master_key);

        self.send(endpoint, request, Some(steam_id)).await
    }

    async fn list_servers(&self) -> Result<Vec<ServerEntry>, DirectoryError> {
        let url = self.endpoint(&["servers"])?;

        self.send("servers".to_string(), self.http.get(url), None)
            .await
    }
}

use thiserror::Error;

/// Failures of calls against the AGDB player directory.
///
/// Only `NotFound` means the upstream confirmed absence. Every other variant is
/// the upstream being unavailable and must never be reported as "not found".
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// AGDB answered 404 for the requested player.
    #[error("Player {0} not found in AGDB")]
    NotFound(String),

    /// Transport failure, timeout, or an undecodable response body.
    #[error("AGDB request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// AGDB answered with a non-success status other than 404 on player routes.
    #[error("AGDB returned status {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    /// The configured base URL cannot have path segments appended.
    #[error("Failed to build AGDB URL for {endpoint} from base {base_url}")]
    InvalidUrl { endpoint: String, base_url: String },
}

impl DirectoryError {
    /// Whether the upstream could not be used, as opposed to confirming absence.
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}

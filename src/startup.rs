use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::{config::AGDB_REQUEST_TIMEOUT_SECS, error::AppError};

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client used for every AGDB call.
///
/// Redirects are disabled so the master key header is never forwarded to another
/// host. Each request is bounded by `AGDB_REQUEST_TIMEOUT_SECS`.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(AGDB_REQUEST_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

//! Refreshing the cached release cycle from the PEPs API.

use crate::error::Result;
use eol_core::{EolError, ReleaseCycle};

/// Canonical source of the release cycle dataset.
pub const CACHE_SOURCE: &str = "https://peps.python.org/api/release-cycle.json";

/// User-Agent for cache refresh requests, identifying this tool and where
/// it lives.
pub fn user_agent() -> String {
    format!(
        "python-eol/{} (+{})",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_REPOSITORY")
    )
}

/// Fetch the release cycle JSON from `url` and return it pretty-printed,
/// with a trailing newline, ready to be written to the cache file.
///
/// The payload is loaded through [`ReleaseCycle::from_json_str`] before
/// anything is returned: a snapshot the checker cannot read back must never
/// reach the cache.
pub async fn fetch_release_cycle(client: &reqwest::Client, url: &str) -> Result<String> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let cycle = ReleaseCycle::from_json_str(&body)?;
    tracing::debug!(releases = cycle.len(), url, "fetched release cycle");

    let value: serde_json::Value = serde_json::from_str(&body).map_err(EolError::Json)?;
    let mut pretty = serde_json::to_string_pretty(&value).map_err(EolError::Json)?;
    pretty.push('\n');
    Ok(pretty)
}

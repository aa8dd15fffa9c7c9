//! Single request/response record lookup.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, instrument};

/// The slice of a creature record worth showing.
#[derive(Debug, Deserialize)]
struct Record {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
}

/// Fetches the record for `name` and prints it.
///
/// One request, no retries, no backoff; any failure propagates to the
/// caller's error boundary.
#[instrument]
pub async fn run(base_url: &str, name: &str) -> Result<()> {
    let url = format!(
        "{}/pokemon/{}",
        base_url.trim_end_matches('/'),
        name.to_lowercase()
    );
    info!(url = %url, "fetching record");

    let record: Record = reqwest::get(&url)
        .await
        .context("request failed")?
        .error_for_status()
        .context("server rejected the lookup")?
        .json()
        .await
        .context("malformed record payload")?;

    println!("{} (#{})", record.name, record.id);
    println!("  height: {}", record.height);
    println!("  weight: {}", record.weight);
    Ok(())
}

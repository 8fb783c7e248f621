//! Tracing subscriber setup for hosts embedding the skipper.

use anyhow::Result;

/// Install a global `tracing` subscriber.
///
/// Respects `RUST_LOG` if set, otherwise uses defaults based on `verbose`.
/// Fails if a global subscriber is already installed.
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter(verbose).to_string());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "sponsorskip=trace,sponsorskip_common=debug,reqwest=debug"
    } else {
        "sponsorskip=info"
    }
}

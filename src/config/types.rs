use serde::{Deserialize, Serialize};
use sponsorskip_common::{Category, CategorySet};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,

    #[serde(default)]
    pub skip: SkipConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Base URL of the SponsorBlock server (without the `/api` path)
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Request timeout in seconds (default: 5)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Query by SHA-256 hash prefix instead of sending the video ID
    #[serde(default)]
    pub privacy_mode: bool,
}

fn default_server_url() -> String {
    "https://sponsor.ajay.app".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            timeout_secs: default_timeout_secs(),
            privacy_mode: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SkipConfig {
    /// Categories to skip, by SponsorBlock wire token
    #[serde(default = "default_categories")]
    pub categories: CategorySet,

    /// Periodic position check interval in milliseconds (default: 1000)
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Ask the host to show a message after each skip (default: true)
    #[serde(default = "default_notify")]
    pub notify: bool,
}

fn default_categories() -> CategorySet {
    CategorySet::from_iter([Category::Sponsor])
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_notify() -> bool {
    true
}

impl Default for SkipConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            tick_interval_ms: default_tick_interval_ms(),
            notify: default_notify(),
        }
    }
}

use crate::config::LookupConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use sha2::{Digest, Sha256};
use sponsorskip_common::{CategorySet, Segment};
use std::time::Duration;

use super::types::{parse_segments, HashedVideo};

const USER_AGENT: &str = concat!("sponsorskip/", env!("CARGO_PKG_VERSION"));

/// Number of hex characters of the SHA-256 video ID hash sent in privacy mode
const HASH_PREFIX_LEN: usize = 4;

/// Reasons a lookup produced no segments
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {0}")]
    Status(StatusCode),

    #[error("empty response body")]
    EmptyBody,

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("no valid segments in response")]
    NoSegments,
}

/// Source of remote skip segments
///
/// A lookup never fails loudly: every failure is reported as `None` so the
/// caller can fall back to embedded chapters.
#[async_trait]
pub trait SegmentLookup: Send + Sync {
    /// Fetch segments for `video_id` restricted to `categories`
    async fn fetch(&self, video_id: &str, categories: &CategorySet) -> Option<Vec<Segment>>;
}

/// SponsorBlock API client
pub struct SponsorBlockClient {
    client: Client,
    base_url: String,
    privacy_mode: bool,
}

impl SponsorBlockClient {
    pub fn new(config: &LookupConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.server_url.trim_end_matches('/').to_string(),
            privacy_mode: config.privacy_mode,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Fetch segments, reporting why nothing usable came back
    pub async fn try_fetch(
        &self,
        video_id: &str,
        categories: &CategorySet,
    ) -> Result<Vec<Segment>, LookupError> {
        let mut query: Vec<(&str, &str)> = Vec::with_capacity(categories.len() + 1);

        let url = if self.privacy_mode {
            self.url(&format!("/skipSegments/{}", hash_prefix(video_id)))
        } else {
            query.push(("videoID", video_id));
            self.url("/skipSegments")
        };
        query.extend(categories.iter().map(|c| ("category", c.wire_token())));

        let response = self.client.get(url).query(&query).send().await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(LookupError::EmptyBody);
        }

        let entries = if self.privacy_mode {
            let videos: Vec<HashedVideo> = serde_json::from_str(&body)?;
            videos
                .into_iter()
                .find(|v| v.video_id == video_id)
                .map(|v| v.segments)
                .unwrap_or_default()
        } else {
            serde_json::from_str::<Vec<serde_json::Value>>(&body)?
        };

        let segments = parse_segments(entries);
        if segments.is_empty() {
            return Err(LookupError::NoSegments);
        }

        Ok(segments)
    }
}

#[async_trait]
impl SegmentLookup for SponsorBlockClient {
    async fn fetch(&self, video_id: &str, categories: &CategorySet) -> Option<Vec<Segment>> {
        if categories.is_empty() {
            tracing::debug!(video_id, "No categories enabled, skipping segment lookup");
            return None;
        }

        match self.try_fetch(video_id, categories).await {
            Ok(segments) => {
                tracing::debug!(video_id, count = segments.len(), "Fetched skip segments");
                Some(segments)
            }
            Err(e) => {
                tracing::debug!(video_id, error = %e, "Segment lookup unavailable");
                None
            }
        }
    }
}

/// First characters of the hex SHA-256 digest of `video_id`
pub fn hash_prefix(video_id: &str) -> String {
    let digest = Sha256::digest(video_id.as_bytes());
    let mut encoded = hex::encode(digest);
    encoded.truncate(HASH_PREFIX_LEN);
    encoded
}

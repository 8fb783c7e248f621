use serde::Deserialize;
use sponsorskip_common::{Category, Error, Result, Segment};

/// One entry of a `/api/skipSegments` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSegment {
    /// `[start, end]` in seconds
    pub segment: Vec<f64>,
    pub category: String,
    #[serde(default)]
    pub action_type: Option<String>,
}

/// One entry of a `/api/skipSegments/<hash prefix>` response
#[derive(Debug, Clone, Deserialize)]
pub struct HashedVideo {
    #[serde(rename = "videoID")]
    pub video_id: String,
    #[serde(default)]
    pub segments: Vec<serde_json::Value>,
}

impl RawSegment {
    /// Validate into a [`Segment`]
    pub fn into_segment(self) -> Result<Segment> {
        if let Some(action) = self.action_type.as_deref() {
            if action != "skip" {
                return Err(Error::invalid_segment(format!(
                    "unsupported action type '{}'",
                    action
                )));
            }
        }

        let category = self.category.parse::<Category>()?;

        match self.segment.as_slice() {
            [start, end] => Segment::new(category, *start, *end),
            other => Err(Error::invalid_segment(format!(
                "expected [start, end], got {} values",
                other.len()
            ))),
        }
    }
}

/// Convert response entries into segments, dropping invalid entries one by one.
pub fn parse_segments(entries: Vec<serde_json::Value>) -> Vec<Segment> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let parsed = serde_json::from_value::<RawSegment>(entry)
                .map_err(|e| Error::invalid_segment(e.to_string()))
                .and_then(RawSegment::into_segment);

            match parsed {
                Ok(segment) => Some(segment),
                Err(e) => {
                    tracing::debug!(index, error = %e, "Dropping malformed segment entry");
                    None
                }
            }
        })
        .collect()
}

//! Skip intervals and host chapter records.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Category;

/// A half-open skip interval `[start, end)` in seconds.
///
/// Fields are private so the interval invariant (`0 <= start < end`, both
/// finite) holds for every value in circulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    category: Category,
    start: f64,
    end: f64,
}

impl Segment {
    pub fn new(category: Category, start: f64, end: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(Error::invalid_segment(format!(
                "non-finite bounds [{start}, {end})"
            )));
        }
        if start < 0.0 {
            return Err(Error::invalid_segment(format!("negative start {start}")));
        }
        if start >= end {
            return Err(Error::invalid_segment(format!(
                "start {start} is not before end {end}"
            )));
        }

        Ok(Self {
            category,
            start,
            end,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// `start <= position < end`. The end boundary is outside, so landing
    /// exactly on it after a seek does not match again.
    pub fn contains(&self, position: f64) -> bool {
        self.start <= position && position < self.end
    }
}

/// One entry of the host's ordered chapter list.
///
/// A chapter has no end of its own; it runs until the next entry's `time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterEntry {
    pub title: String,
    pub time: f64,
}

impl ChapterEntry {
    pub fn new(title: impl Into<String>, time: f64) -> Self {
        Self {
            title: title.into(),
            time,
        }
    }
}

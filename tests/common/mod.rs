//! Shared test harness for integration tests.
//!
//! Provides [`FakeHost`], an in-memory player that records seeks and
//! messages, and [`StubLookup`], a scripted segment source. Both are cheap
//! to clone; clones share state so tests can inspect them after handing one
//! to a controller.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use sponsorskip::config::SkipConfig;
use sponsorskip::controller::SkipController;
use sponsorskip::lookup::SegmentLookup;
use sponsorskip::{Category, CategorySet, ChapterEntry, PlayerHost, Segment};
use sponsorskip_common::{Error, Result};
use tokio::sync::Notify;

/// Mutable player state behind a [`FakeHost`].
#[derive(Debug, Default)]
pub struct HostState {
    pub position: Option<f64>,
    pub chapters: Vec<ChapterEntry>,
    pub current_chapter: Option<i64>,
    pub metadata: HashMap<String, String>,
    pub path: Option<String>,
    pub seeks: Vec<f64>,
    pub messages: Vec<String>,
    pub reject_seeks: bool,
}

/// In-memory player.
#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    state: Arc<Mutex<HostState>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose `comment` tag points at `https://youtu.be/<video_id>`.
    pub fn with_video(video_id: &str) -> Self {
        let host = Self::new();
        host.set_metadata("comment", &format!("https://youtu.be/{video_id}"));
        host
    }

    pub fn set_metadata(&self, key: &str, value: &str) {
        self.state
            .lock()
            .metadata
            .insert(key.to_string(), value.to_string());
    }

    pub fn clear_metadata(&self) {
        self.state.lock().metadata.clear();
    }

    pub fn set_path(&self, path: &str) {
        self.state.lock().path = Some(path.to_string());
    }

    pub fn set_position(&self, position: f64) {
        self.state.lock().position = Some(position);
    }

    pub fn set_chapters(&self, chapters: Vec<ChapterEntry>) {
        self.state.lock().chapters = chapters;
    }

    pub fn set_current_chapter(&self, index: i64) {
        self.state.lock().current_chapter = Some(index);
    }

    pub fn reject_seeks(&self) {
        self.state.lock().reject_seeks = true;
    }

    pub fn seeks(&self) -> Vec<f64> {
        self.state.lock().seeks.clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.state.lock().messages.clone()
    }
}

impl PlayerHost for FakeHost {
    fn position(&self) -> Option<f64> {
        self.state.lock().position
    }

    fn chapters(&self) -> Vec<ChapterEntry> {
        self.state.lock().chapters.clone()
    }

    fn current_chapter(&self) -> Option<i64> {
        self.state.lock().current_chapter
    }

    fn metadata(&self, key: &str) -> Option<String> {
        self.state.lock().metadata.get(key).cloned()
    }

    fn media_path(&self) -> Option<String> {
        self.state.lock().path.clone()
    }

    fn seek(&self, target: f64) -> Result<()> {
        let mut state = self.state.lock();
        if state.reject_seeks {
            return Err(Error::host("seek rejected"));
        }
        state.seeks.push(target);
        state.position = Some(target);
        Ok(())
    }

    fn show_message(&self, text: &str) -> Result<()> {
        self.state.lock().messages.push(text.to_string());
        Ok(())
    }
}

/// Scripted segment source.
///
/// Answers per video ID; unknown IDs get `None`. IDs registered with
/// [`StubLookup::gate`] block until [`StubLookup::release`] is called.
#[derive(Default)]
pub struct StubLookup {
    responses: Mutex<HashMap<String, Option<Vec<Segment>>>>,
    gated: Mutex<Vec<String>>,
    gate: Notify,
    calls: AtomicUsize,
}

impl StubLookup {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, video_id: &str, segments: Option<Vec<Segment>>) {
        self.responses.lock().insert(video_id.to_string(), segments);
    }

    pub fn gate(&self, video_id: &str) {
        self.gated.lock().push(video_id.to_string());
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SegmentLookup for StubLookup {
    async fn fetch(&self, video_id: &str, _categories: &CategorySet) -> Option<Vec<Segment>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let gated = self.gated.lock().iter().any(|id| id == video_id);
        if gated {
            self.gate.notified().await;
        }

        self.responses.lock().get(video_id).cloned().flatten()
    }
}

pub fn segment(category: Category, start: f64, end: f64) -> Segment {
    Segment::new(category, start, end).expect("test segment should be valid")
}

pub fn skip_config(categories: &[Category]) -> SkipConfig {
    SkipConfig {
        categories: categories.iter().copied().collect(),
        tick_interval_ms: 1000,
        notify: true,
    }
}

/// Controller over a [`FakeHost`] clone and a [`StubLookup`].
pub fn controller(
    host: &FakeHost,
    lookup: &Arc<StubLookup>,
    categories: &[Category],
) -> SkipController<FakeHost> {
    let lookup: Arc<dyn SegmentLookup> = lookup.clone();
    SkipController::new(host.clone(), lookup, &skip_config(categories))
}

/// Wait for the next lookup completion, failing the test after a timeout.
pub async fn resolve(controller: &mut SkipController<FakeHost>) -> bool {
    tokio::time::timeout(Duration::from_secs(5), controller.resolve_pending())
        .await
        .expect("timed out waiting for segment lookup")
}

/// `[SponsorBlock]: Sponsor` from 10s to 40s, then `Intro`.
pub fn sponsor_chapters() -> Vec<ChapterEntry> {
    vec![
        ChapterEntry::new("[SponsorBlock]: Sponsor", 10.0),
        ChapterEntry::new("Intro", 40.0),
    ]
}

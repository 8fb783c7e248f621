//! Skip orchestration for the currently playing item.
//!
//! [`SkipController`] consumes [`HostEvent`]s one at a time. On file load it
//! resolves a video reference from metadata and issues the remote lookup as
//! a background task; the completion comes back over a channel tagged with
//! the media-item generation so results for a superseded item are dropped.
//!
//! Exactly one evidence source is consulted per evaluation:
//!
//! - `RemoteResolved`: position changes and timer ticks are matched against
//!   the fetched segments.
//! - `AwaitingRemote` / `ChapterFallback`: chapter changes and seeks are
//!   matched against the host's live chapter list.
//!
//! Once remote segments arrive they stay authoritative until the next file
//! load, even if they cover fewer categories than the chapters do.

mod state;

pub use state::{ControllerState, FetchOutcome, ResolvedSegmentSource, Skip, SkipOrigin};

use std::sync::Arc;
use std::time::Duration;

use sponsorskip_common::CategorySet;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::chapters;
use crate::config::{Config, SkipConfig};
use crate::host::{HostEvent, PlayerHost};
use crate::lookup::{SegmentLookup, SponsorBlockClient};
use crate::matcher;
use crate::reference;

/// Metadata keys checked for the source URL, in order.
const COMMENT_KEYS: [&str; 2] = ["comment", "COMMENT"];

/// Drives skipping for one player.
pub struct SkipController<H> {
    host: H,
    lookup: Arc<dyn SegmentLookup>,
    categories: Arc<CategorySet>,
    notify: bool,
    tick_interval: Duration,
    state: ControllerState,
    source: ResolvedSegmentSource,
    generation: u64,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

/// One wake-up of the event loop.
enum Step {
    Event(Option<HostEvent>),
    Fetched(FetchOutcome),
    Tick,
}

impl<H: PlayerHost> SkipController<H> {
    pub fn new(host: H, lookup: Arc<dyn SegmentLookup>, config: &SkipConfig) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        Self {
            host,
            lookup,
            categories: Arc::new(config.categories.clone()),
            notify: config.notify,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            state: ControllerState::Idle,
            source: ResolvedSegmentSource::None,
            generation: 0,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Build a controller backed by the SponsorBlock client described in `config`.
    pub fn from_config(host: H, config: &Config) -> Self {
        let lookup: Arc<dyn SegmentLookup> = Arc::new(SponsorBlockClient::new(&config.lookup));
        Self::new(host, lookup, &config.skip)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn source(&self) -> &ResolvedSegmentSource {
        &self.source
    }

    /// Incremented on every file load and file end.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handle one host event, returning the skip applied, if any.
    ///
    /// A file load spawns the remote lookup on the current Tokio runtime.
    /// Outside a runtime the lookup is skipped and chapters are used.
    pub fn handle_event(&mut self, event: HostEvent) -> Option<Skip> {
        match event {
            HostEvent::FileLoaded => {
                self.on_file_loaded();
                None
            }
            HostEvent::FileEnded => {
                self.reset(ControllerState::Idle);
                None
            }
            HostEvent::ChapterChanged | HostEvent::Seeked => match self.state {
                ControllerState::AwaitingRemote | ControllerState::ChapterFallback => {
                    self.evaluate_chapters()
                }
                ControllerState::Idle | ControllerState::RemoteResolved => None,
            },
            HostEvent::PositionChanged | HostEvent::Tick => match self.state {
                ControllerState::RemoteResolved => self.evaluate_remote(),
                _ => None,
            },
        }
    }

    /// Apply a finished lookup. Returns `false` if it was stale and dropped.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.generation != self.generation || self.state != ControllerState::AwaitingRemote
        {
            debug!(
                outcome_generation = outcome.generation,
                generation = self.generation,
                state = %self.state,
                "Discarding stale segment lookup"
            );
            return false;
        }

        match outcome.segments {
            Some(segments) if !segments.is_empty() => {
                info!(
                    generation = self.generation,
                    count = segments.len(),
                    "Using remote skip segments"
                );
                self.state = ControllerState::RemoteResolved;
                self.source = ResolvedSegmentSource::Remote(segments);
            }
            _ => self.enter_chapter_fallback(),
        }

        true
    }

    /// Wait for the next lookup to finish and apply it.
    pub async fn resolve_pending(&mut self) -> bool {
        match self.outcome_rx.recv().await {
            Some(outcome) => self.apply_outcome(outcome),
            None => false,
        }
    }

    /// Event loop: host events, lookup completions and the periodic tick.
    ///
    /// Returns when the host closes its event channel.
    pub async fn run(mut self, mut events: mpsc::Receiver<HostEvent>) {
        let mut ticker = tokio::time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(categories = self.categories.len(), "Skip controller started");

        loop {
            let step = tokio::select! {
                event = events.recv() => Step::Event(event),
                Some(outcome) = self.outcome_rx.recv() => Step::Fetched(outcome),
                _ = ticker.tick() => Step::Tick,
            };

            match step {
                Step::Event(Some(event)) => {
                    self.handle_event(event);
                }
                Step::Event(None) => break,
                Step::Fetched(outcome) => {
                    self.apply_outcome(outcome);
                }
                Step::Tick => {
                    self.handle_event(HostEvent::Tick);
                }
            }
        }

        info!("Skip controller stopped");
    }

    fn reset(&mut self, state: ControllerState) {
        self.generation += 1;
        self.source = ResolvedSegmentSource::None;
        self.state = state;
    }

    fn enter_chapter_fallback(&mut self) {
        debug!(generation = self.generation, "Falling back to chapter markers");
        self.state = ControllerState::ChapterFallback;
        self.source = ResolvedSegmentSource::ChapterDerived;
    }

    fn on_file_loaded(&mut self) {
        self.reset(ControllerState::AwaitingRemote);

        let Some(video_id) = self.resolve_reference() else {
            debug!(generation = self.generation, "No video reference in metadata");
            self.enter_chapter_fallback();
            return;
        };

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                debug!(generation = self.generation, error = %e, "No async runtime for segment lookup");
                self.enter_chapter_fallback();
                return;
            }
        };

        debug!(generation = self.generation, %video_id, "Looking up skip segments");

        let lookup = Arc::clone(&self.lookup);
        let categories = Arc::clone(&self.categories);
        let outcome_tx = self.outcome_tx.clone();
        let generation = self.generation;

        runtime.spawn(async move {
            let segments = lookup.fetch(&video_id, &categories).await;
            // The receiver lives as long as the controller.
            let _ = outcome_tx.send(FetchOutcome {
                generation,
                segments,
            });
        });
    }

    fn resolve_reference(&self) -> Option<String> {
        let from_comment = COMMENT_KEYS.iter().find_map(|key| {
            let comment = self.host.metadata(key);
            video_id_from_text(comment.as_deref())
        });

        from_comment.or_else(|| {
            let path = self.host.media_path()?;
            video_id_from_text(Some(&path)).or_else(|| reference::id_from_path(&path))
        })
    }

    fn evaluate_remote(&self) -> Option<Skip> {
        let ResolvedSegmentSource::Remote(segments) = &self.source else {
            return None;
        };
        let position = self.host.position()?;
        let segment = matcher::find(position, segments)?;

        self.apply_skip(
            Skip {
                category: segment.category(),
                target: segment.end(),
                origin: SkipOrigin::Remote,
            },
            position,
        )
    }

    fn evaluate_chapters(&self) -> Option<Skip> {
        let chapters = self.host.chapters();
        let index = self.host.current_chapter().unwrap_or(-1);
        let (category, target) = chapters::skippable_interval_at(&chapters, index, &self.categories)?;

        let position = self
            .host
            .position()
            .or_else(|| usize::try_from(index).ok().and_then(|i| chapters.get(i)).map(|c| c.time))
            .unwrap_or_default();

        self.apply_skip(
            Skip {
                category,
                target,
                origin: SkipOrigin::Chapter,
            },
            position,
        )
    }

    fn apply_skip(&self, skip: Skip, position: f64) -> Option<Skip> {
        info!(
            category = %skip.category,
            from = position,
            to = skip.target,
            origin = ?skip.origin,
            "Skipping segment"
        );

        if let Err(e) = self.host.seek(skip.target) {
            warn!(error = %e, target = skip.target, "Host rejected seek");
            return None;
        }

        if self.notify {
            let message = format!("Skipped {}", skip.category.label().to_lowercase());
            if let Err(e) = self.host.show_message(&message) {
                warn!(error = %e, "Host failed to show skip message");
            }
        }

        Some(skip)
    }
}

/// Primary URL shapes first, then embedded player links.
fn video_id_from_text(text: Option<&str>) -> Option<String> {
    reference::extract_reference(text).or_else(|| {
        let url = reference::extract_url_from_text(text)?;
        reference::id_from_embed_url(&url)
    })
}

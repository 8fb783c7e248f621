use sponsorskip_common::{Category, Segment};
use std::fmt;

/// Lifecycle of the skipper for one media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No media item loaded.
    Idle,
    /// Remote lookup in flight; chapter skips apply meanwhile.
    AwaitingRemote,
    /// Remote segments are authoritative for the rest of the item.
    RemoteResolved,
    /// No remote data; chapters are the only source.
    ChapterFallback,
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::AwaitingRemote => write!(f, "awaiting_remote"),
            Self::RemoteResolved => write!(f, "remote_resolved"),
            Self::ChapterFallback => write!(f, "chapter_fallback"),
        }
    }
}

/// Where skip intervals for the current item come from.
///
/// Chapter-derived intervals are not cached: they are read from the host's
/// chapter list at every evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResolvedSegmentSource {
    #[default]
    None,
    Remote(Vec<Segment>),
    ChapterDerived,
}

/// Completion of a remote lookup, tagged with the media-item generation it
/// was issued for.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub generation: u64,
    pub segments: Option<Vec<Segment>>,
}

/// Which evidence produced a skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipOrigin {
    Remote,
    Chapter,
}

/// A seek the controller asked the host to perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skip {
    pub category: Category,
    pub target: f64,
    pub origin: SkipOrigin,
}

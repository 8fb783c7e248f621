//! Sponsorskip - Sponsor segment resolution and automatic skipping
//!
//! Decides whether the current playback position is inside a sponsor segment
//! and where to jump to. Segments come from a SponsorBlock server when the
//! file's metadata names a YouTube video, and from `[SponsorBlock]` chapter
//! markers otherwise. The player itself is reached through [`host::PlayerHost`].

pub mod chapters;
pub mod config;
pub mod controller;
pub mod host;
pub mod logging;
pub mod lookup;
pub mod matcher;
pub mod reference;

pub use controller::{ControllerState, SkipController};
pub use host::{HostEvent, PlayerHost};
pub use sponsorskip_common::{Category, CategorySet, ChapterEntry, Segment};

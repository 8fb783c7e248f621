//! Boundary to the media player hosting the skipper.
//!
//! The player owns playback position, the chapter list and file metadata.
//! The skipper reads those through [`PlayerHost`] and asks for seeks; it
//! never drives playback otherwise.

use sponsorskip_common::{ChapterEntry, Result};

/// Player notifications the controller reacts to.
///
/// Hosts forward their property observers and file lifecycle callbacks as
/// these events, in order, over a single channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// A new media item finished loading.
    FileLoaded,
    /// Playback of the current item ended.
    FileEnded,
    /// The current chapter index changed.
    ChapterChanged,
    /// The user or another script seeked.
    Seeked,
    /// The playback position property changed.
    PositionChanged,
    /// Periodic timer tick.
    Tick,
}

/// Read/seek access to the host player.
pub trait PlayerHost {
    /// Current playback position in seconds, if known.
    fn position(&self) -> Option<f64>;

    /// Full ordered chapter list of the current item.
    fn chapters(&self) -> Vec<ChapterEntry>;

    /// 0-based index of the playing chapter. `None` or a negative value
    /// means no chapter is active.
    fn current_chapter(&self) -> Option<i64>;

    /// A file metadata tag, looked up by exact key.
    fn metadata(&self, key: &str) -> Option<String>;

    /// Path or URL of the current item.
    fn media_path(&self) -> Option<String> {
        None
    }

    /// Request an absolute seek to `target` seconds.
    fn seek(&self, target: f64) -> Result<()>;

    /// Show a short on-screen message.
    fn show_message(&self, _text: &str) -> Result<()> {
        Ok(())
    }
}

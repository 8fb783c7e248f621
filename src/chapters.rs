//! Sponsor segments encoded as embedded chapters.
//!
//! When a file is downloaded with SponsorBlock marking enabled, each segment
//! becomes a chapter titled `[SponsorBlock]: <label>`. The segment ends where
//! the following chapter begins, so the last chapter can never be skipped.

use sponsorskip_common::{Category, CategorySet, ChapterEntry};

/// Title prefix of a chapter that marks a sponsor segment.
pub const SPONSOR_CHAPTER_PREFIX: &str = "[SponsorBlock]: ";

/// Decode the category label from a marked chapter title.
///
/// Returns the label verbatim; unmarked titles yield `None`.
pub fn chapter_label(title: &str) -> Option<&str> {
    title.strip_prefix(SPONSOR_CHAPTER_PREFIX)
}

/// The skip for the chapter currently playing, if there is one.
///
/// `current_index` is the host's 0-based chapter index; negative means no
/// chapter is active. Returns the chapter's category and the start time of
/// the next chapter as the jump target.
pub fn skippable_interval_at(
    chapters: &[ChapterEntry],
    current_index: i64,
    enabled: &CategorySet,
) -> Option<(Category, f64)> {
    let index = usize::try_from(current_index).ok()?;
    let current = chapters.get(index)?;
    let label = chapter_label(&current.title)?;
    let category = enabled.by_label(label)?;
    let next = chapters.get(index + 1)?;

    Some((category, next.time))
}

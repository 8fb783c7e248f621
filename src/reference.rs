//! Video reference extraction from free-text metadata.
//!
//! Downloaders such as yt-dlp store the source URL in the file's `comment`
//! tag. These helpers find that URL and pull the YouTube video ID out of it.
//! Everything here is a pure function over strings: a miss is `None`, never
//! an error.

use once_cell::sync::Lazy;
use regex::Regex;

static YOUTUBE_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"https?://(?:[A-Za-z0-9-]+\.)*(?:youtu\.be|youtube(?:-nocookie)?\.[A-Za-z.]+)(?:[/?][^\s"'<>]*)?"#,
    )
    .expect("youtube url regex should compile")
});

/// URL shapes tried in order; the first capture wins.
static VIDEO_ID_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"[?&]v=([A-Za-z0-9_-]+)").expect("watch query regex should compile"),
        Regex::new(r"youtu\.be/([A-Za-z0-9_-]+)").expect("short link regex should compile"),
        Regex::new(r"/shorts/([A-Za-z0-9_-]+)").expect("shorts path regex should compile"),
    ]
});

/// Embedded player and legacy `/v/` links, only on a YouTube host.
static EMBED_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https?://(?:[A-Za-z0-9-]+\.)*youtube(?:-nocookie)?\.[A-Za-z.]+/(?:embed|v)/([A-Za-z0-9_-]+)",
    )
    .expect("embed url regex should compile")
});

/// yt-dlp's default output template: `Title [VIDEOID].ext`
static DOWNLOADED_FILE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([A-Za-z0-9_-]{11})\]\.[A-Za-z0-9]+$")
        .expect("downloaded file name regex should compile")
});

/// Find the first YouTube URL in `text`.
pub fn extract_url_from_text(text: Option<&str>) -> Option<String> {
    let text = text?;
    if text.is_empty() {
        return None;
    }

    YOUTUBE_URL_PATTERN
        .find(text)
        .map(|m| m.as_str().to_string())
}

/// Pull the video ID out of a YouTube URL.
pub fn id_from_url(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Pull the video ID out of an embedded player URL (`/embed/ID` or `/v/ID`).
///
/// Not part of [`id_from_url`]: callers try it only after the primary shapes
/// miss.
pub fn id_from_embed_url(url: &str) -> Option<String> {
    EMBED_URL_PATTERN
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Pull the video ID out of a yt-dlp style file name or path.
pub fn id_from_path(path: &str) -> Option<String> {
    DOWNLOADED_FILE_PATTERN
        .captures(path)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// URL extraction followed by ID extraction.
pub fn extract_reference(text: Option<&str>) -> Option<String> {
    extract_url_from_text(text).and_then(|url| id_from_url(&url))
}

//! Sponsor category table and the enabled-category set.
//!
//! Every category has two spellings: the human-readable label that yt-dlp
//! writes into chapter titles when marking SponsorBlock segments, and the
//! wire token the SponsorBlock API uses. Both mappings are fixed and 1:1.
//! Serde uses the wire token.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Sponsor-content classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Paid promotion or direct advertisement.
    #[serde(rename = "sponsor")]
    Sponsor,
    /// Unpaid promotion of the creator's own merchandise, channels or donations.
    #[serde(rename = "selfpromo")]
    SelfPromotion,
    /// Reminder to like, subscribe or follow.
    #[serde(rename = "interaction")]
    InteractionReminder,
    /// Point of interest the viewer most likely wants to jump to.
    #[serde(rename = "poi_highlight")]
    Highlight,
    /// Tangential filler not required to follow the main content.
    #[serde(rename = "filler")]
    FillerDialogue,
    /// Non-music portion of a music video.
    #[serde(rename = "music_offtopic")]
    MusicOffTopic,
    /// Recap of previous episodes or preview of upcoming content.
    #[serde(rename = "preview")]
    Preview,
}

impl Category {
    /// Every category, in table order.
    pub const ALL: [Category; 7] = [
        Self::Sponsor,
        Self::SelfPromotion,
        Self::InteractionReminder,
        Self::Highlight,
        Self::FillerDialogue,
        Self::MusicOffTopic,
        Self::Preview,
    ];

    /// Human-readable label, as written into marked chapter titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sponsor => "Sponsor",
            Self::SelfPromotion => "Unpaid/Self Promotion",
            Self::InteractionReminder => "Interaction Reminder",
            Self::Highlight => "Highlight",
            Self::FillerDialogue => "Filler Tangent",
            Self::MusicOffTopic => "Non-Music Section",
            Self::Preview => "Preview/Recap",
        }
    }

    /// SponsorBlock API token.
    pub fn wire_token(self) -> &'static str {
        match self {
            Self::Sponsor => "sponsor",
            Self::SelfPromotion => "selfpromo",
            Self::InteractionReminder => "interaction",
            Self::Highlight => "poi_highlight",
            Self::FillerDialogue => "filler",
            Self::MusicOffTopic => "music_offtopic",
            Self::Preview => "preview",
        }
    }

    /// Look up a category by its exact label. No case folding or trimming.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Look up a category by its exact wire token.
    pub fn from_wire_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.wire_token() == token)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_wire_token(s).ok_or_else(|| Error::unknown_category(s))
    }
}

/// The categories the user wants skipped.
///
/// Built once from configuration and never mutated afterwards; share it
/// behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet(BTreeSet<Category>);

impl CategorySet {
    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate in table order.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().copied()
    }

    /// Find the enabled category whose label matches `label` exactly.
    pub fn by_label(&self, label: &str) -> Option<Category> {
        Category::from_label(label).filter(|c| self.contains(*c))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

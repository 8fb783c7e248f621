//! Sponsorskip-Common: Shared types and error handling.
//!
//! This crate provides the data model used across sponsorskip:
//!
//! - **Categories**: The fixed [`Category`] table mapping chapter labels to
//!   SponsorBlock wire tokens, and the immutable [`CategorySet`] of enabled
//!   categories
//! - **Segments**: Validated half-open [`Segment`] intervals and the
//!   [`ChapterEntry`] records read from the host player
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use sponsorskip_common::{Category, CategorySet, Segment};
//!
//! let enabled = CategorySet::from_iter([Category::Sponsor, Category::Preview]);
//! assert!(enabled.contains(Category::Sponsor));
//!
//! let segment = Segment::new(Category::Sponsor, 12.0, 40.5).unwrap();
//! assert!(segment.contains(12.0));
//! assert!(!segment.contains(40.5));
//!
//! assert_eq!(Category::from_label("Unpaid/Self Promotion"), Some(Category::SelfPromotion));
//! assert!(Segment::new(Category::Sponsor, 40.0, 12.0).is_err());
//! ```

pub mod error;
pub mod segment;
pub mod types;

pub use error::{Error, Result};
pub use segment::{ChapterEntry, Segment};
pub use types::*;

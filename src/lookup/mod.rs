//! Remote skip-segment lookup against a SponsorBlock server.
//!
//! [`SponsorBlockClient`] issues `GET /api/skipSegments` requests and
//! validates the returned intervals entry by entry. Remote data is a
//! best-effort enhancement: transport errors, bad status codes and malformed
//! payloads all surface as `None` from [`SegmentLookup::fetch`].

mod client;
mod types;

pub use client::{hash_prefix, LookupError, SegmentLookup, SponsorBlockClient};
pub use types::{parse_segments, HashedVideo, RawSegment};

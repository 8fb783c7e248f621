use sponsorskip_common::Segment;

/// Find the first segment containing `position`.
///
/// Iteration order decides between overlapping segments.
pub fn find(position: f64, segments: &[Segment]) -> Option<&Segment> {
    segments.iter().find(|segment| segment.contains(position))
}

/// Where to jump from `position`, if it is inside a segment.
///
/// Returns the end of the containing segment. The end itself is outside the
/// segment, so deciding again from the returned position does not re-match.
pub fn decide(position: f64, segments: &[Segment]) -> Option<f64> {
    find(position, segments).map(Segment::end)
}

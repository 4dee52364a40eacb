//! Skeleton line inference from labeled landmarks.
//!
//! Given the model's landmark set, derives the connecting line segments
//! that visualize the detected skeleton: head to chin, across the
//! shoulders, across the hips, and a spine from the chin down to the
//! hip midline. Pure geometry in the normalized 0–1000 space — the
//! overlay component and the SVG report both render the same segments.

use crate::landmark::{LandmarkRole, collect_role, find_role};
use crate::types::Landmark;

/// A line segment between two points in the normalized 0–1000 space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start x.
    pub x1: f64,
    /// Start y.
    pub y1: f64,
    /// End x.
    pub x2: f64,
    /// End y.
    pub y2: f64,
}

impl Segment {
    /// Segment connecting two landmarks.
    #[must_use]
    pub const fn between(a: &Landmark, b: &Landmark) -> Self {
        Self {
            x1: a.x,
            y1: a.y,
            x2: b.x,
            y2: b.y,
        }
    }
}

/// Derive the skeleton line segments for a landmark set.
///
/// Connection policy:
/// - head (first `Vertex`) to chin (first `Chin`) when both exist;
/// - across the shoulders only when **exactly** two shoulder points
///   were detected (one or three-plus produce no shoulder line);
/// - across the hips under the same exactly-two rule;
/// - a spine from the chin to the midpoint of the first two hip points
///   when the chin and at least one hip exist — with a single hip the
///   midpoint degenerates to that point.
///
/// Fewer than two landmarks overall can form no line, so the function
/// short-circuits to an empty set.
#[must_use]
pub fn skeleton_segments(landmarks: &[Landmark]) -> Vec<Segment> {
    if landmarks.len() < 2 {
        return Vec::new();
    }

    let head = find_role(landmarks, LandmarkRole::Vertex);
    let chin = find_role(landmarks, LandmarkRole::Chin);
    let shoulders = collect_role(landmarks, LandmarkRole::Shoulder);
    let hips = collect_role(landmarks, LandmarkRole::Hip);

    let mut segments = Vec::new();

    if let (Some(head), Some(chin)) = (head, chin) {
        segments.push(Segment::between(head, chin));
    }

    if let [left, right] = shoulders.as_slice() {
        segments.push(Segment::between(left, right));
    }

    if let [left, right] = hips.as_slice() {
        segments.push(Segment::between(left, right));
    }

    if let (Some(chin), [first, rest @ ..]) = (chin, hips.as_slice()) {
        let second = rest.first().unwrap_or(first);
        segments.push(Segment {
            x1: chin.x,
            y1: chin.y,
            x2: f64::midpoint(first.x, second.x),
            y2: f64::midpoint(first.y, second.y),
        });
    }

    segments
}

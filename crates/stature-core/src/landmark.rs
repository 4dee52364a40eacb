//! Landmark role classification.
//!
//! The external model labels landmarks with free text ("vertex (top of
//! head)", "Left Shoulder", …) — the vocabulary is not contractually
//! fixed. This module maps raw labels onto a closed set of roles via
//! case-insensitive substring containment so the rest of the crate can
//! reason about anatomy without string matching.

use crate::types::Landmark;

/// A closed set of anatomical roles a landmark label can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkRole {
    /// Top of the head.
    Vertex,
    /// Bottom of the chin.
    Chin,
    /// Acromion (shoulder) point, either side.
    Shoulder,
    /// Greater trochanter (hip) point, either side.
    Hip,
    /// Patella (knee) point, either side.
    Knee,
    /// Lateral malleolus (ankle) point, either side.
    Ankle,
}

impl LandmarkRole {
    /// Substring rules in match order. The first rule whose needle
    /// occurs in the lowercased label wins, so a pathological label
    /// containing several needles still maps to exactly one role.
    const RULES: [(Self, &'static str); 6] = [
        (Self::Vertex, "vertex"),
        (Self::Chin, "chin"),
        (Self::Shoulder, "shoulder"),
        (Self::Hip, "hip"),
        (Self::Knee, "knee"),
        (Self::Ankle, "ankle"),
    ];

    /// Classify a raw label into zero or one role.
    ///
    /// Matching is case-insensitive substring containment; labels with
    /// no matching needle return `None` and are rendered as plain
    /// markers with no skeleton participation.
    #[must_use]
    pub fn classify(label: &str) -> Option<Self> {
        let lowered = label.to_lowercase();
        Self::RULES
            .into_iter()
            .find(|(_, needle)| lowered.contains(needle))
            .map(|(role, _)| role)
    }
}

/// Find the first landmark classified as `role`.
#[must_use]
pub fn find_role(landmarks: &[Landmark], role: LandmarkRole) -> Option<&Landmark> {
    landmarks
        .iter()
        .find(|l| LandmarkRole::classify(&l.label) == Some(role))
}

/// Collect every landmark classified as `role`, in input order.
#[must_use]
pub fn collect_role(landmarks: &[Landmark], role: LandmarkRole) -> Vec<&Landmark> {
    landmarks
        .iter()
        .filter(|l| LandmarkRole::classify(&l.label) == Some(role))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_plain_role_names() {
        assert_eq!(LandmarkRole::classify("vertex"), Some(LandmarkRole::Vertex));
        assert_eq!(LandmarkRole::classify("chin"), Some(LandmarkRole::Chin));
        assert_eq!(
            LandmarkRole::classify("shoulder"),
            Some(LandmarkRole::Shoulder)
        );
        assert_eq!(LandmarkRole::classify("hip"), Some(LandmarkRole::Hip));
        assert_eq!(LandmarkRole::classify("knee"), Some(LandmarkRole::Knee));
        assert_eq!(LandmarkRole::classify("ankle"), Some(LandmarkRole::Ankle));
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(
            LandmarkRole::classify("Left Shoulder"),
            Some(LandmarkRole::Shoulder)
        );
        assert_eq!(LandmarkRole::classify("VERTEX"), Some(LandmarkRole::Vertex));
    }

    #[test]
    fn substring_containment_matches_decorated_labels() {
        assert_eq!(
            LandmarkRole::classify("vertex (top of head)"),
            Some(LandmarkRole::Vertex)
        );
        assert_eq!(
            LandmarkRole::classify("right hip / greater trochanter"),
            Some(LandmarkRole::Hip)
        );
        assert_eq!(
            LandmarkRole::classify("lateral malleolus (ankle)"),
            Some(LandmarkRole::Ankle)
        );
    }

    #[test]
    fn unknown_labels_classify_to_none() {
        assert_eq!(LandmarkRole::classify("elbow"), None);
        assert_eq!(LandmarkRole::classify(""), None);
        assert_eq!(LandmarkRole::classify("greater trochanter"), None);
    }

    #[test]
    fn multi_needle_labels_resolve_by_rule_order() {
        // "hip" precedes "knee" in the rule table.
        assert_eq!(
            LandmarkRole::classify("hip-to-knee midpoint"),
            Some(LandmarkRole::Hip)
        );
        // "vertex" wins over everything.
        assert_eq!(
            LandmarkRole::classify("shoulder vertex"),
            Some(LandmarkRole::Vertex)
        );
    }

    #[test]
    fn find_role_returns_first_match() {
        let landmarks = vec![
            Landmark::new(1.0, 1.0, "left shoulder"),
            Landmark::new(2.0, 2.0, "right shoulder"),
        ];
        let found = find_role(&landmarks, LandmarkRole::Shoulder);
        assert_eq!(found.map(|l| l.x), Some(1.0));
        assert!(find_role(&landmarks, LandmarkRole::Chin).is_none());
    }

    #[test]
    fn collect_role_preserves_input_order() {
        let landmarks = vec![
            Landmark::new(1.0, 0.0, "right hip"),
            Landmark::new(2.0, 0.0, "chin"),
            Landmark::new(3.0, 0.0, "left hip"),
        ];
        let hips = collect_role(&landmarks, LandmarkRole::Hip);
        let xs: Vec<f64> = hips.iter().map(|l| l.x).collect();
        assert_eq!(xs, vec![1.0, 3.0]);
    }
}

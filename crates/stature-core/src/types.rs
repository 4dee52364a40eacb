//! Shared types for the stature estimation domain.
//!
//! These mirror the wire contract of the hosted analysis model
//! (camelCase JSON field names) so the adapter layer can deserialize
//! responses directly into them.

use serde::{Deserialize, Serialize};

/// Upper bound of the normalized landmark coordinate space.
///
/// Landmark `x`/`y` values are expressed in a fixed 0–1000 space,
/// independent of the photo's actual pixel dimensions. The overlay and
/// the SVG report both render into a `0 0 1000 1000` viewport stretched
/// over the image, so coordinates never need rescaling locally.
pub const COORD_MAX: f64 = 1000.0;

/// A detected anatomical feature: a labeled 2-D point.
///
/// `label` is free text chosen by the external model (e.g. `"vertex"`,
/// `"left_shoulder"`); it is not a closed vocabulary and labels are not
/// guaranteed unique. Semantic matching is done by
/// [`crate::landmark::LandmarkRole::classify`].
///
/// Coordinates are expected to lie in `[0, COORD_MAX]` but that is part
/// of the external model's contract, not validated here. Out-of-range
/// points are simply clipped by the rendering viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position in the normalized 0–1000 space.
    pub x: f64,
    /// Vertical position in the normalized 0–1000 space.
    pub y: f64,
    /// Free-text feature name assigned by the model.
    pub label: String,
}

impl Landmark {
    /// Create a new landmark.
    #[must_use]
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }
}

/// Anthropometric proportion ratios reported by the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyRatios {
    /// Head height to total stature (e.g. 7.5 means "7.5 heads tall").
    pub head_to_body: f64,
    /// Leg length to torso length.
    pub leg_to_torso: f64,
    /// Arm span relative to stature.
    pub arm_length_ratio: f64,
}

/// The model's estimate of the camera's pose relative to the subject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraPerspective {
    /// Camera tilt from horizontal, in degrees.
    pub tilt_angle_degrees: f64,
    /// Estimated camera-to-subject distance in meters.
    pub estimated_distance_meters: f64,
}

/// The full analysis result returned by the hosted model.
///
/// `confidence_range_cm[0] <= estimated_height_cm <=
/// confidence_range_cm[1]` is expected from the model but not enforced
/// locally; it is an external contract.
///
/// `ratios` and `camera_perspective` are optional: the declared response
/// schema only requires the height, range, landmarks, and analysis
/// fields, and the model omits the rest often enough that consumers must
/// tolerate absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    /// Point estimate of the subject's height in centimetres.
    pub estimated_height_cm: f64,
    /// Low/high bounds bracketing the point estimate, in centimetres.
    pub confidence_range_cm: [f64; 2],
    /// Detected skeletal landmarks in the normalized 0–1000 space.
    pub landmarks: Vec<Landmark>,
    /// Anthropometric ratios, when the model reports them.
    #[serde(default)]
    pub ratios: Option<BodyRatios>,
    /// Free-text technical commentary from the model.
    pub analysis: String,
    /// Camera pose estimate, when the model reports it.
    #[serde(default)]
    pub camera_perspective: Option<CameraPerspective>,
}

/// A physical item of known real-world size used as a scale hint.
///
/// The size table is only ever sent to the external model as prompt
/// context. No local geometric calibration happens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceType {
    /// Standard interior door frame, 203 cm.
    Door,
    /// ID or credit card, 8.56 cm.
    CreditCard,
    /// A4 sheet of paper, 29.7 cm (long edge).
    A4Paper,
    /// Standard soda can, 12.2 cm.
    SodaCan,
    /// No reference object; the model falls back to statistical
    /// average proportions.
    #[default]
    None,
}

impl ReferenceType {
    /// All reference types in display order for the config select.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Door,
        Self::A4Paper,
        Self::CreditCard,
        Self::SodaCan,
    ];

    /// Stable identifier used as the `<select>` option value.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Door => "DOOR",
            Self::CreditCard => "CREDIT_CARD",
            Self::A4Paper => "A4_PAPER",
            Self::SodaCan => "SODA_CAN",
            Self::None => "NONE",
        }
    }

    /// Parse a stable identifier back into a reference type.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.id() == id)
    }

    /// Human-readable option label for the config select.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Door => "Standard Door Frame (203cm)",
            Self::CreditCard => "ID/Credit Card (8.56cm)",
            Self::A4Paper => "A4 Paper (29.7cm)",
            Self::SodaCan => "Standard Soda Can (12.2cm)",
            Self::None => "None (Statistical Average)",
        }
    }

    /// Scale description embedded into the analysis prompt.
    #[must_use]
    pub const fn scale_hint(self) -> &'static str {
        match self {
            Self::Door => "203cm",
            Self::CreditCard => "8.56cm",
            Self::A4Paper => "29.7cm",
            Self::SodaCan => "12.2cm",
            Self::None => "statistical average proportions (approx 7.5 heads high)",
        }
    }
}

/// User-supplied configuration for one measurement.
///
/// Created empty, populated by the upload step, mutated by the config
/// step, consumed by the analysis call, and reset wholesale by the
/// "new measurement" action. There is no partial reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    /// The uploaded photo as a `data:<mime>;base64,…` URL. Empty until
    /// an upload succeeds.
    pub image: String,
    /// Whether the subject is wearing shoes (affects the prompt only).
    pub wearing_shoes: bool,
    /// User confirmation that posture requirements are met. Analysis is
    /// gated on this.
    pub posture_confirmed: bool,
    /// Scale reference object present in the frame, if any.
    pub reference_type: ReferenceType,
}

/// A web reference returned alongside a search-grounded news response.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsSource {
    /// Page title, or `"Reference"` when the metadata omitted one.
    pub title: String,
    /// Link target.
    pub uri: String,
}

/// A search-grounded news summary with its supporting references.
///
/// An empty `sources` list is a valid outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsDigest {
    /// The model's free-text summary.
    pub text: String,
    /// Supporting web references (display truncates to the first few).
    pub sources: Vec<NewsSource>,
}

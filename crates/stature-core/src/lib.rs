//! stature-core: Pure domain core (sans-IO).
//!
//! Holds the result data contract shared with the hosted analysis
//! model, the landmark role classifier, the skeleton line inference,
//! the wizard state machine, and unit conversion.
//!
//! This crate has **no browser or network dependencies** -- it operates
//! on plain values and returns structured data. All I/O lives in
//! `stature-api` and `stature-io`.

pub mod landmark;
pub mod skeleton;
pub mod types;
pub mod units;
pub mod wizard;

pub use landmark::LandmarkRole;
pub use skeleton::{Segment, skeleton_segments};
pub use types::{
    BodyRatios, CameraPerspective, EstimationResult, Landmark, NewsDigest, NewsSource,
    ReferenceType, UserInput,
};
pub use units::cm_to_ft_in;
pub use wizard::{Step, WizardEvent, WizardState};

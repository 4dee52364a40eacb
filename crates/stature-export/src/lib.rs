//! stature-export: Annotated-overlay SVG serializer (sans-IO).
//!
//! Produces a standalone SVG document of a measurement: the photo,
//! the inferred skeleton lines, the landmark markers and labels, and a
//! caption with the height estimate. Pure functions returning `String`;
//! all download/browser interaction lives in `stature-io`.

mod svg_report;

pub use svg_report::{ReportCaption, to_svg};

//! Annotated measurement report as a standalone SVG document.
//!
//! Mirrors the live overlay exactly — same coordinate viewport, same
//! line inference, same marker styling — so a saved report looks like
//! what was on screen. Uses the [`svg`] crate for document construction
//! and XML escaping.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use svg::Document;
use svg::node::element::{Circle, Group, Image, Line, Rectangle, Text};

use stature_core::types::COORD_MAX;
use stature_core::{Landmark, cm_to_ft_in, skeleton_segments};

/// Stroke color for skeleton lines and marker fill.
const ACCENT: &str = "#3b82f6";
/// Outer marker radius.
const MARKER_RADIUS: f64 = 8.0;
/// Inner marker radius.
const MARKER_CORE_RADIUS: f64 = 4.0;
/// Label offset from the marker center.
const LABEL_OFFSET: (f64, f64) = (15.0, 5.0);

/// Optional caption rendered along the bottom edge of the report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportCaption {
    /// Height estimate to print, in centimetres.
    pub height_cm: Option<f64>,
}

/// Serialize a measurement into a standalone SVG document string.
///
/// The document uses the same `0 0 1000 1000` viewport as the live
/// overlay: the photo is stretched to fill it
/// (`preserveAspectRatio="none"`) so landmark coordinates line up
/// without rescaling. Layers, back to front: the dimmed photo, the
/// skeleton line group, one marker + label per landmark, and the
/// caption when provided.
///
/// `image_href` is typically a `data:` URL so the report is fully
/// self-contained.
///
/// # Examples
///
/// ```
/// use stature_core::Landmark;
/// use stature_export::{ReportCaption, to_svg};
///
/// let landmarks = vec![
///     Landmark::new(500.0, 40.0, "vertex"),
///     Landmark::new(500.0, 160.0, "chin"),
/// ];
/// let svg = to_svg(
///     "data:image/png;base64,AA==",
///     &landmarks,
///     ReportCaption { height_cm: Some(178.2) },
/// );
/// assert!(svg.contains("viewBox=\"0 0 1000 1000\""));
/// assert!(svg.contains("178.2 cm"));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_svg(image_href: &str, landmarks: &[Landmark], caption: ReportCaption) -> String {
    let span = COORD_MAX as u32;

    let mut doc = Document::new()
        .set("width", span)
        .set("height", span)
        .set("viewBox", (0, 0, span, span))
        .add(
            Rectangle::new()
                .set("width", span)
                .set("height", span)
                .set("fill", "black"),
        )
        .add(
            Image::new()
                .set("href", image_href)
                .set("width", span)
                .set("height", span)
                .set("preserveAspectRatio", "none")
                .set("opacity", 0.7),
        );

    // Skeleton lines, one group.
    let segments = skeleton_segments(landmarks);
    if !segments.is_empty() {
        let mut lines = Group::new()
            .set("stroke", ACCENT)
            .set("stroke-width", 4)
            .set("stroke-linecap", "round")
            .set("opacity", 0.6);
        for s in segments {
            lines = lines.add(
                Line::new()
                    .set("x1", s.x1)
                    .set("y1", s.y1)
                    .set("x2", s.x2)
                    .set("y2", s.y2),
            );
        }
        doc = doc.add(lines);
    }

    // Markers and labels.
    for point in landmarks {
        doc = doc
            .add(
                Circle::new()
                    .set("cx", point.x)
                    .set("cy", point.y)
                    .set("r", MARKER_RADIUS)
                    .set("fill", ACCENT),
            )
            .add(
                Circle::new()
                    .set("cx", point.x)
                    .set("cy", point.y)
                    .set("r", MARKER_CORE_RADIUS)
                    .set("fill", "white"),
            )
            .add(
                Text::new(point.label.clone())
                    .set("x", point.x + LABEL_OFFSET.0)
                    .set("y", point.y + LABEL_OFFSET.1)
                    .set("fill", "white")
                    .set("font-size", 14)
                    .set("font-weight", "bold"),
            );
    }

    if let Some(height_cm) = caption.height_cm {
        let text = format!("{height_cm:.1} cm  ({})", cm_to_ft_in(height_cm));
        doc = doc
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", span - 48)
                    .set("width", span)
                    .set("height", 48)
                    .set("fill", "black")
                    .set("opacity", 0.6),
            )
            .add(
                Text::new(text)
                    .set("x", 16)
                    .set("y", span - 16)
                    .set("fill", "white")
                    .set("font-size", 28)
                    .set("font-family", "sans-serif"),
            );
    }

    // The svg crate omits the XML declaration, so we prepend it.
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{doc}\n")
}

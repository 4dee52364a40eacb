//! Landmark overlay: the photo with the detected skeleton drawn on top.

use dioxus::prelude::*;
use stature_core::{Landmark, skeleton_segments};

/// Props for the [`LandmarkOverlay`] component.
#[derive(Props, Clone, PartialEq)]
pub struct LandmarkOverlayProps {
    /// The analyzed photo as a data URL.
    image: String,
    /// Landmarks returned by the analysis, in the normalized 0–1000
    /// space.
    landmarks: Vec<Landmark>,
}

/// Layered composition of the analysis result.
///
/// Back to front: the photo (dimmed), the inferred skeleton line
/// segments, and a marker (outer + inner circle) with a text label per
/// landmark.
///
/// The SVG renders into a fixed `0 0 1000 1000` logical viewport
/// stretched to fill the container (`preserveAspectRatio="none"`), so
/// landmark coordinates line up with the photo regardless of its
/// actual pixel dimensions.
#[component]
pub fn LandmarkOverlay(props: LandmarkOverlayProps) -> Element {
    let segments = skeleton_segments(&props.landmarks);

    rsx! {
        div { class: "overlay-frame",
            img {
                src: "{props.image}",
                class: "overlay-photo",
                alt: "Uploaded for analysis",
            }
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                class: "overlay-canvas",
                view_box: "0 0 1000 1000",
                "preserveAspectRatio": "none",

                if !segments.is_empty() {
                    g {
                        stroke: "#3b82f6",
                        stroke_width: "4",
                        "stroke-linecap": "round",
                        opacity: "0.6",
                        for (i, s) in segments.iter().enumerate() {
                            line {
                                key: "{i}",
                                x1: "{s.x1}",
                                y1: "{s.y1}",
                                x2: "{s.x2}",
                                y2: "{s.y2}",
                            }
                        }
                    }
                }

                for (i, point) in props.landmarks.iter().enumerate() {
                    {render_marker(i, point)}
                }
            }
        }
    }
}

/// Render one landmark marker: outer dot, inner dot, and label.
fn render_marker(index: usize, point: &Landmark) -> Element {
    let label_x = point.x + 15.0;
    let label_y = point.y + 5.0;

    rsx! {
        g { key: "{index}",
            circle {
                cx: "{point.x}",
                cy: "{point.y}",
                r: "8",
                fill: "#3b82f6",
            }
            circle {
                cx: "{point.x}",
                cy: "{point.y}",
                r: "4",
                fill: "white",
            }
            text {
                x: "{label_x}",
                y: "{label_y}",
                fill: "white",
                "font-size": "14",
                "font-weight": "bold",
                "{point.label}"
            }
        }
    }
}

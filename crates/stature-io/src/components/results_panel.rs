//! Stature estimate card: the headline number plus its supporting data.

use dioxus::prelude::*;
use stature_core::{EstimationResult, cm_to_ft_in};
use stature_export::ReportCaption;

use crate::{analytics, download};

/// Props for the [`ResultsPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ResultsPanelProps {
    /// The analysis result to display.
    result: EstimationResult,
    /// The analyzed photo (needed to build the saved report).
    image: String,
    /// Fired by the "New Measurement" action.
    on_reset: EventHandler<()>,
}

/// Result card: estimate, confidence interval, technical insights,
/// ratio tiles, and the save/new-measurement actions.
///
/// `ratios` and `camera_perspective` are optional in the contract, so
/// the tiles fall back to population averages when absent and the
/// perspective line is simply omitted.
#[component]
pub fn ResultsPanel(props: ResultsPanelProps) -> Element {
    let result = &props.result;
    let mut save_error = use_signal(|| Option::<String>::None);

    let height_cm = format!("{:.1}", result.estimated_height_cm);
    let height_ft_in = cm_to_ft_in(result.estimated_height_cm);
    let half_range =
        (result.confidence_range_cm[1] - result.confidence_range_cm[0]) / 2.0;
    let interval = format!("± {half_range:.1} cm");
    let range = format!(
        "{:.1} - {:.1} cm",
        result.confidence_range_cm[0], result.confidence_range_cm[1],
    );
    let head_ratio = result
        .ratios
        .map_or_else(|| "7.50".to_owned(), |r| format!("{:.2}", r.head_to_body));
    let leg_ratio = result
        .ratios
        .map_or_else(|| "1.10".to_owned(), |r| format!("{:.2}", r.leg_to_torso));
    let perspective = result.camera_perspective.map(|cam| {
        format!(
            "Camera tilt {:.1}°, distance {:.1} m",
            cam.tilt_angle_degrees, cam.estimated_distance_meters,
        )
    });

    let save_report = {
        let result = props.result.clone();
        let image = props.image.clone();
        move |_| {
            let svg = stature_export::to_svg(
                &image,
                &result.landmarks,
                ReportCaption {
                    height_cm: Some(result.estimated_height_cm),
                },
            );
            if let Err(e) = download::download_svg(&svg, "stature-report.svg") {
                save_error.set(Some(format!("Download failed: {e}")));
            } else {
                save_error.set(None);
                analytics::track_report_saved();
            }
        }
    };

    rsx! {
        div { class: "card results-card",
            div { class: "card-label", "Stature Estimate" }
            div { class: "headline",
                span { class: "headline-value", "{height_cm}" }
                span { class: "headline-unit", "cm" }
            }
            div { class: "headline-imperial", "{height_ft_in}" }

            div { class: "interval-row",
                div {
                    div { class: "tile-label", "Confidence Interval" }
                    div { class: "tile-value", "{interval}" }
                }
                div {
                    div { class: "tile-label", "Range" }
                    div { class: "tile-value", "{range}" }
                }
            }

            div { class: "insights",
                h4 { "Technical Insights" }
                p { "{result.analysis}" }
                if let Some(ref line) = perspective {
                    p { class: "perspective", "{line}" }
                }
                div { class: "ratio-grid",
                    div {
                        div { class: "tile-label", "Head Ratio" }
                        div { class: "tile-value mono", "1 : {head_ratio}" }
                    }
                    div {
                        div { class: "tile-label", "Leg Ratio" }
                        div { class: "tile-value mono", "{leg_ratio} : 1" }
                    }
                }
            }

            if let Some(ref err) = save_error() {
                p { class: "error-line", "{err}" }
            }

            div { class: "action-row",
                button {
                    class: "btn btn-secondary",
                    onclick: save_report,
                    "Save Overlay (SVG)"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| props.on_reset.call(()),
                    "New Measurement"
                }
            }
        }
    }
}

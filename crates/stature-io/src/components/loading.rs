//! Loading view shown while the analysis request is in flight.

use dioxus::prelude::*;

/// Spinner and progress copy for the loading step.
///
/// The progress lines are decorative — all actual work happens in the
/// hosted model and there is no progress feedback to surface.
#[component]
pub fn AnalysisLoading() -> Element {
    rsx! {
        div { class: "loading-screen",
            div { class: "spinner" }
            h2 { "Analyzing Anthropometry..." }
            div { class: "loading-steps",
                p { "Identifying vertex and malleolus points" }
                p { "Calibrating pixel-to-stature ratio" }
                p { "Applying perspective correction" }
            }
        }
    }
}

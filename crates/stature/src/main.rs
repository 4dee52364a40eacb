use dioxus::logger::tracing;
use dioxus::prelude::*;
use stature_api::{DEFAULT_NEWS_QUERY, GeminiClient};
use stature_core::{Step, WizardEvent, WizardState};
use stature_io::{
    AnalysisLoading, ConfigPanel, EditPanel, LandmarkOverlay, NewsPanel, PhotoUpload,
    ResultsPanel, analytics,
};

/// The one user-facing message for any analysis failure. Network,
/// schema, and model-declined causes are deliberately not
/// distinguished; the remedy is the same retry either way.
const ANALYSIS_ERROR: &str =
    "Analysis failed. Ensure you've uploaded a clear full-body image and try again.";

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(app);
}

/// Apply one wizard event to the state signal through the pure reducer.
fn dispatch(mut wizard: Signal<WizardState>, event: WizardEvent) {
    let next = wizard.peek().clone().apply(event);
    wizard.set(next);
}

/// Reset to a fresh measurement: wizard state, effect state, and the
/// generation guard (so an in-flight analysis cannot resurrect after
/// the reset).
fn reset_app(
    wizard: Signal<WizardState>,
    mut generation: Signal<u64>,
    mut edit_prompt: Signal<String>,
    mut notice: Signal<Option<String>>,
) {
    generation += 1;
    edit_prompt.set(String::new());
    notice.set(None);
    dispatch(wizard, WizardEvent::Reset);
}

/// Root application component.
///
/// Owns the wizard state plus the effect bookkeeping the reducer
/// deliberately excludes: the analysis generation guard, the edit and
/// news spinner flags, the edit prompt, and the transient alert banner.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    let wizard = use_signal(WizardState::default);
    let mut generation = use_signal(|| 0u64);
    let mut edit_prompt = use_signal(String::new);
    let mut is_editing = use_signal(|| false);
    let mut is_fetching_news = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);
    let client =
        use_hook(|| GeminiClient::new(option_env!("GEMINI_API_KEY").unwrap_or_default()));

    // --- Upload handler ---
    let on_upload = move |data_url: String| {
        dispatch(wizard, WizardEvent::ImageLoaded(data_url));
    };

    // --- Config change handler ---
    let on_config_change = move |event: WizardEvent| {
        dispatch(wizard, event);
    };

    // --- Analysis task ---
    let start_analysis = {
        let client = client.clone();
        move |(): ()| {
            let snapshot = wizard.peek().clone();
            if !snapshot.can_analyze() {
                return;
            }
            dispatch(wizard, WizardEvent::AnalysisStarted);

            // Increment the generation so any in-flight analysis from a
            // prior trigger knows it is stale and must discard its result.
            generation += 1;
            let my_generation = *generation.peek();
            let client = client.clone();
            let input = snapshot.input;

            spawn(async move {
                // Yield to the browser event loop so the Loading step
                // paints before the request is assembled.
                gloo_timers::future::TimeoutFuture::new(0).await;

                let outcome = client
                    .analyze(&input.image, input.reference_type, input.wearing_shoes)
                    .await;

                // A newer analysis superseded this one; discard silently.
                if *generation.peek() != my_generation {
                    return;
                }

                match outcome {
                    Ok(result) => {
                        analytics::track_analysis(true);
                        dispatch(wizard, WizardEvent::AnalysisSucceeded(result));
                    }
                    Err(e) => {
                        tracing::error!("analysis failed: {e}");
                        analytics::track_analysis(false);
                        dispatch(wizard, WizardEvent::AnalysisFailed(ANALYSIS_ERROR.to_owned()));
                    }
                }
            });
        }
    };

    // --- Image edit task ---
    let apply_edit = {
        let client = client.clone();
        move |(): ()| {
            let prompt = edit_prompt.peek().trim().to_owned();
            if prompt.is_empty() || *is_editing.peek() {
                return;
            }
            let image = wizard.peek().input.image.clone();
            let client = client.clone();
            is_editing.set(true);

            spawn(async move {
                match client.edit_image(&image, &prompt).await {
                    Ok(edited) => {
                        analytics::track_edit(true);
                        dispatch(wizard, WizardEvent::ImageEdited(edited));
                        edit_prompt.set(String::new());
                    }
                    Err(e) => {
                        // Includes the expected text-only outcome; the
                        // original image in state is left untouched.
                        tracing::error!("image edit failed: {e}");
                        analytics::track_edit(false);
                        notice.set(Some("Failed to edit image.".to_owned()));
                    }
                }
                // Always drop the spinner, success or failure.
                is_editing.set(false);
            });
        }
    };

    // --- News task ---
    let fetch_news = {
        let client = client.clone();
        move |(): ()| {
            if *is_fetching_news.peek() {
                return;
            }
            let client = client.clone();
            is_fetching_news.set(true);

            spawn(async move {
                match client.fetch_news(DEFAULT_NEWS_QUERY).await {
                    Ok(digest) => {
                        analytics::track_news(true);
                        dispatch(wizard, WizardEvent::NewsLoaded(digest));
                    }
                    Err(e) => {
                        tracing::error!("news fetch failed: {e}");
                        analytics::track_news(false);
                        notice.set(Some("Failed to fetch news.".to_owned()));
                    }
                }
                is_fetching_news.set(false);
            });
        }
    };

    // --- Layout ---
    let state = wizard();
    let step = state.step;
    let step_class = |active: bool| if active { "step active" } else { "step" };
    let upload_class = step_class(step == Step::Upload);
    let config_class = step_class(step == Step::Config);
    let results_class = step_class(step == Step::Results);

    rsx! {
        style { dangerous_inner_html: include_str!("style.css") }

        div { class: "app-shell",
            header { class: "app-header",
                div {
                    class: "brand",
                    onclick: move |_| reset_app(wizard, generation, edit_prompt, notice),
                    h1 { "StatureAI" }
                }
                nav { class: "steps",
                    span { class: "{upload_class}", "Upload" }
                    span { class: "step-chevron", "›" }
                    span { class: "{config_class}", "Configure" }
                    span { class: "step-chevron", "›" }
                    span { class: "{results_class}", "Result" }
                }
            }

            main { class: "app-main",
                if let Some(ref message) = notice() {
                    div { class: "notice-banner",
                        span { "{message}" }
                        button {
                            class: "notice-dismiss",
                            onclick: move |_| notice.set(None),
                            "✕"
                        }
                    }
                }

                if step == Step::Upload {
                    div { class: "upload-hero",
                        h2 { "Scientific Height Estimation" }
                        p { class: "hero-copy",
                            "Upload a full-body photo to calculate stature using \
                             anthropometric ratios and skeletal landmark detection."
                        }

                        PhotoUpload { on_upload: on_upload }

                        div { class: "feature-grid",
                            div { class: "feature-card",
                                h3 { "Precision Landmarks" }
                                p { "Detects vertex, acromion, and malleolus points." }
                            }
                            div { class: "feature-card",
                                h3 { "Privacy First" }
                                p { "Images are processed and never stored permanently." }
                            }
                            div { class: "feature-card",
                                h3 { "Statistical Ratios" }
                                p { "Calculates stature based on known human averages." }
                            }
                        }
                    }
                }

                if step == Step::Config {
                    ConfigPanel {
                        input: state.input.clone(),
                        error: state.error.clone(),
                        on_change: on_config_change,
                        on_analyze: start_analysis,
                        on_reset: move |()| reset_app(wizard, generation, edit_prompt, notice),
                    }
                }

                if step == Step::Loading {
                    AnalysisLoading {}
                }

                if step == Step::Results {
                    if let Some(ref result) = state.result {
                        div { class: "results-grid",
                            div { class: "results-main",
                                LandmarkOverlay {
                                    image: state.input.image.clone(),
                                    landmarks: result.landmarks.clone(),
                                }
                                EditPanel {
                                    prompt: edit_prompt(),
                                    is_editing: is_editing(),
                                    on_prompt_change: move |prompt| edit_prompt.set(prompt),
                                    on_apply: apply_edit,
                                }
                            }
                            div { class: "results-side",
                                ResultsPanel {
                                    result: result.clone(),
                                    image: state.input.image.clone(),
                                    on_reset: move |()| {
                                        reset_app(wizard, generation, edit_prompt, notice);
                                    },
                                }
                                NewsPanel {
                                    news: state.news.clone(),
                                    is_fetching: is_fetching_news(),
                                    on_fetch: fetch_news,
                                }
                            }
                        }
                    }
                }
            }

            footer { class: "app-footer",
                p { "StatureAI Labs. Estimates are statistical, not medical measurements." }
            }
        }
    }
}

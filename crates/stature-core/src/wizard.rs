//! Measurement wizard state machine.
//!
//! The UI flow is a four-step wizard: upload → config → loading →
//! results. All mutable UI state lives in one [`WizardState`] value and
//! every change goes through the pure reducer [`WizardState::apply`],
//! so transitions are deterministic and testable without a browser.
//!
//! Transient spinner flags for the edit and news calls are *not* part
//! of this state — they are effect bookkeeping owned by the launcher's
//! signals and reset on every async exit path.

use crate::types::{EstimationResult, NewsDigest, ReferenceType, UserInput};

/// The wizard's current step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Step {
    /// Waiting for a photo.
    #[default]
    Upload,
    /// Photo loaded; gathering measurement configuration.
    Config,
    /// Analysis request in flight.
    Loading,
    /// Analysis complete; result on screen.
    Results,
}

/// Everything a wizard transition can react to.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    /// A photo was uploaded and encoded as a data URL.
    ImageLoaded(String),
    /// Footwear toggle changed.
    SetWearingShoes(bool),
    /// Posture confirmation checkbox changed.
    SetPostureConfirmed(bool),
    /// Reference object selection changed.
    SetReferenceType(ReferenceType),
    /// The user requested analysis. Ignored unless posture is confirmed
    /// and an image is present (the UI also disables the action).
    AnalysisStarted,
    /// The analysis call returned a decoded result.
    AnalysisSucceeded(EstimationResult),
    /// The analysis call failed; carries the user-facing message.
    AnalysisFailed(String),
    /// The edit call produced a replacement image data URL.
    ImageEdited(String),
    /// The news call returned a digest.
    NewsLoaded(NewsDigest),
    /// Start over. Unconditional and idempotent.
    Reset,
}

/// The wizard's complete mutable state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    /// Current step.
    pub step: Step,
    /// Measurement configuration gathered so far.
    pub input: UserInput,
    /// Latest analysis result. Replaced wholesale by each successful
    /// analysis, never merged.
    pub result: Option<EstimationResult>,
    /// User-facing error from the last failed analysis, shown on the
    /// config step.
    pub error: Option<String>,
    /// Cached news digest, cleared on reset.
    pub news: Option<NewsDigest>,
}

impl WizardState {
    /// Whether the analyze action is currently allowed.
    #[must_use]
    pub fn can_analyze(&self) -> bool {
        self.input.posture_confirmed && !self.input.image.is_empty()
    }

    /// Apply one event, producing the next state.
    ///
    /// Total over all `(state, event)` pairs: events that do not apply
    /// in the current state (e.g. [`WizardEvent::AnalysisStarted`] with
    /// unmet preconditions) leave the state unchanged.
    #[must_use]
    pub fn apply(mut self, event: WizardEvent) -> Self {
        match event {
            WizardEvent::ImageLoaded(image) => {
                self.input.image = image;
                self.step = Step::Config;
                self
            }
            WizardEvent::SetWearingShoes(value) => {
                self.input.wearing_shoes = value;
                self
            }
            WizardEvent::SetPostureConfirmed(value) => {
                self.input.posture_confirmed = value;
                self
            }
            WizardEvent::SetReferenceType(reference) => {
                self.input.reference_type = reference;
                self
            }
            WizardEvent::AnalysisStarted => {
                if self.can_analyze() {
                    self.step = Step::Loading;
                    self.error = None;
                }
                self
            }
            WizardEvent::AnalysisSucceeded(result) => {
                self.result = Some(result);
                self.error = None;
                self.step = Step::Results;
                self
            }
            WizardEvent::AnalysisFailed(message) => {
                self.error = Some(message);
                self.step = Step::Config;
                self
            }
            WizardEvent::ImageEdited(image) => {
                self.input.image = image;
                self
            }
            WizardEvent::NewsLoaded(digest) => {
                self.news = Some(digest);
                self
            }
            WizardEvent::Reset => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Landmark, NewsSource};

    fn sample_result(height_cm: f64) -> EstimationResult {
        EstimationResult {
            estimated_height_cm: height_cm,
            confidence_range_cm: [height_cm - 4.0, height_cm + 4.0],
            landmarks: vec![Landmark::new(500.0, 40.0, "vertex")],
            ratios: None,
            analysis: "test".to_owned(),
            camera_perspective: None,
        }
    }

    fn configured_state() -> WizardState {
        WizardState::default()
            .apply(WizardEvent::ImageLoaded("data:image/png;base64,AA==".into()))
            .apply(WizardEvent::SetReferenceType(ReferenceType::Door))
            .apply(WizardEvent::SetWearingShoes(true))
            .apply(WizardEvent::SetPostureConfirmed(true))
    }

    #[test]
    fn initial_state_is_upload_step() {
        let state = WizardState::default();
        assert_eq!(state.step, Step::Upload);
        assert!(state.input.image.is_empty());
        assert!(state.result.is_none());
        assert!(state.error.is_none());
        assert!(state.news.is_none());
    }

    #[test]
    fn image_loaded_moves_to_config() {
        let state = WizardState::default()
            .apply(WizardEvent::ImageLoaded("data:image/png;base64,AA==".into()));
        assert_eq!(state.step, Step::Config);
        assert_eq!(state.input.image, "data:image/png;base64,AA==");
    }

    #[test]
    fn analysis_requires_confirmed_posture() {
        let state = WizardState::default()
            .apply(WizardEvent::ImageLoaded("data:image/png;base64,AA==".into()))
            .apply(WizardEvent::AnalysisStarted);
        // Posture not confirmed — no transition.
        assert_eq!(state.step, Step::Config);
    }

    #[test]
    fn analysis_requires_an_image() {
        let state = WizardState::default()
            .apply(WizardEvent::SetPostureConfirmed(true))
            .apply(WizardEvent::AnalysisStarted);
        assert_eq!(state.step, Step::Upload);
    }

    #[test]
    fn successful_analysis_reaches_results() {
        let state = configured_state()
            .apply(WizardEvent::AnalysisStarted)
            .apply(WizardEvent::AnalysisSucceeded(sample_result(178.2)));
        assert_eq!(state.step, Step::Results);
        let result = state.result.as_ref();
        assert!(
            result.is_some_and(|r| (r.estimated_height_cm - 178.2).abs() < f64::EPSILON),
            "expected stored result, got {result:?}"
        );
        assert!(state.error.is_none());
    }

    #[test]
    fn failed_analysis_returns_to_config_with_error() {
        let state = configured_state()
            .apply(WizardEvent::AnalysisStarted)
            .apply(WizardEvent::AnalysisFailed("Analysis failed.".into()));
        assert_eq!(state.step, Step::Config);
        assert_eq!(state.error.as_deref(), Some("Analysis failed."));
        // Config survives the failure so the user can retry as-is.
        assert!(state.input.posture_confirmed);
        assert!(state.input.wearing_shoes);
        assert_eq!(state.input.reference_type, ReferenceType::Door);
    }

    #[test]
    fn starting_analysis_clears_previous_error() {
        let state = configured_state()
            .apply(WizardEvent::AnalysisStarted)
            .apply(WizardEvent::AnalysisFailed("Analysis failed.".into()))
            .apply(WizardEvent::AnalysisStarted);
        assert_eq!(state.step, Step::Loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn new_result_replaces_the_previous_one() {
        let state = configured_state()
            .apply(WizardEvent::AnalysisSucceeded(sample_result(170.0)))
            .apply(WizardEvent::AnalysisSucceeded(sample_result(181.5)));
        assert!(
            state
                .result
                .is_some_and(|r| (r.estimated_height_cm - 181.5).abs() < f64::EPSILON)
        );
    }

    #[test]
    fn image_edit_replaces_image_without_step_change() {
        let state = configured_state()
            .apply(WizardEvent::AnalysisSucceeded(sample_result(178.2)))
            .apply(WizardEvent::ImageEdited("data:image/png;base64,BB==".into()));
        assert_eq!(state.step, Step::Results);
        assert_eq!(state.input.image, "data:image/png;base64,BB==");
    }

    #[test]
    fn news_loads_without_step_change() {
        let digest = NewsDigest {
            text: "New anthropometry research.".to_owned(),
            sources: vec![NewsSource {
                title: "Reference".to_owned(),
                uri: "https://example.org".to_owned(),
            }],
        };
        let state = configured_state()
            .apply(WizardEvent::AnalysisSucceeded(sample_result(178.2)))
            .apply(WizardEvent::NewsLoaded(digest.clone()));
        assert_eq!(state.step, Step::Results);
        assert_eq!(state.news, Some(digest));
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let digest = NewsDigest {
            text: "x".to_owned(),
            sources: vec![],
        };
        let state = configured_state()
            .apply(WizardEvent::AnalysisSucceeded(sample_result(178.2)))
            .apply(WizardEvent::NewsLoaded(digest))
            .apply(WizardEvent::Reset);
        assert_eq!(state, WizardState::default());
    }

    #[test]
    fn reset_is_idempotent() {
        let once = configured_state().apply(WizardEvent::Reset);
        let twice = once.clone().apply(WizardEvent::Reset);
        assert_eq!(once, twice);
    }

    #[test]
    fn full_scenario_walkthrough() {
        // Upload → config with door reference → analysis → results.
        let state = WizardState::default()
            .apply(WizardEvent::ImageLoaded("data:image/jpeg;base64,AA==".into()));
        assert_eq!(state.step, Step::Config);

        let state = state
            .apply(WizardEvent::SetReferenceType(ReferenceType::Door))
            .apply(WizardEvent::SetWearingShoes(true))
            .apply(WizardEvent::SetPostureConfirmed(true));
        assert!(state.can_analyze());

        let state = state.apply(WizardEvent::AnalysisStarted);
        assert_eq!(state.step, Step::Loading);

        let state = state.apply(WizardEvent::AnalysisSucceeded(sample_result(178.2)));
        assert_eq!(state.step, Step::Results);
        assert!(
            state
                .result
                .is_some_and(|r| (r.estimated_height_cm - 178.2).abs() < f64::EPSILON)
        );
    }
}

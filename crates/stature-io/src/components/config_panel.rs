//! Measurement configuration panel.
//!
//! Shows the uploaded photo next to the footwear toggle, reference
//! object select, and posture confirmation. The analyze action stays
//! disabled until posture is confirmed — the same precondition the
//! wizard reducer enforces.

use dioxus::prelude::*;
use stature_core::{ReferenceType, UserInput, WizardEvent};

/// Props for the [`ConfigPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ConfigPanelProps {
    /// Current measurement configuration (read-only).
    input: UserInput,
    /// Error from the last failed analysis, if any.
    error: Option<String>,
    /// Fired with a wizard event when any configuration field changes.
    on_change: EventHandler<WizardEvent>,
    /// Fired when the user requests analysis.
    on_analyze: EventHandler<()>,
    /// Fired when the user wants to pick a different photo.
    on_reset: EventHandler<()>,
}

/// Configuration step: photo preview plus measurement options.
#[component]
pub fn ConfigPanel(props: ConfigPanelProps) -> Element {
    let input = &props.input;
    let on_change = props.on_change;

    let footwear_class = |selected: bool| {
        if selected {
            "btn btn-toggle selected"
        } else {
            "btn btn-toggle"
        }
    };
    let barefoot_class = footwear_class(!input.wearing_shoes);
    let shoes_class = footwear_class(input.wearing_shoes);
    let reference_id = input.reference_type.id();

    rsx! {
        div { class: "config-grid",
            div { class: "config-preview",
                img { src: "{input.image}", alt: "Preview" }
            }

            div { class: "config-form",
                h2 { "Configuration" }

                div { class: "field",
                    label { "Footwear Status" }
                    div { class: "toggle-row",
                        button {
                            class: "{barefoot_class}",
                            onclick: move |_| on_change.call(WizardEvent::SetWearingShoes(false)),
                            "Barefoot"
                        }
                        button {
                            class: "{shoes_class}",
                            onclick: move |_| on_change.call(WizardEvent::SetWearingShoes(true)),
                            "Wearing Shoes"
                        }
                    }
                }

                div { class: "field",
                    label { "Reference Object (Recommended)" }
                    select {
                        value: "{reference_id}",
                        onchange: move |evt| {
                            if let Some(reference) = ReferenceType::from_id(&evt.value()) {
                                on_change.call(WizardEvent::SetReferenceType(reference));
                            }
                        },
                        for reference in ReferenceType::ALL {
                            option {
                                value: "{reference.id()}",
                                selected: reference == input.reference_type,
                                "{reference.label()}"
                            }
                        }
                    }
                    p { class: "field-hint",
                        "A reference object in frame significantly improves absolute accuracy."
                    }
                }

                div { class: "field posture-confirm",
                    input {
                        r#type: "checkbox",
                        id: "posture",
                        checked: input.posture_confirmed,
                        onchange: move |evt| {
                            on_change.call(WizardEvent::SetPostureConfirmed(evt.checked()));
                        },
                    }
                    label { r#for: "posture",
                        "I confirm I am standing upright, looking forward, and my feet are fully visible in the frame."
                    }
                }

                if let Some(ref err) = props.error {
                    div { class: "error-banner", "{err}" }
                }

                button {
                    class: "btn btn-primary btn-analyze",
                    disabled: !input.posture_confirmed,
                    onclick: move |_| props.on_analyze.call(()),
                    "Analyze Stature"
                }
                button {
                    class: "btn btn-link",
                    onclick: move |_| props.on_reset.call(()),
                    "Change Photo"
                }
            }
        }
    }
}

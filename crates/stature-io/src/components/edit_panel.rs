//! AI image editing panel.
//!
//! Free-text prompt applied to the current photo via the hosted edit
//! model. The prompt value lives in the launcher so it can be cleared
//! only when an edit actually succeeds.

use dioxus::prelude::*;

/// Props for the [`EditPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct EditPanelProps {
    /// Current prompt text.
    prompt: String,
    /// Whether an edit call is in flight (disables the controls).
    is_editing: bool,
    /// Fired on every prompt input change.
    on_prompt_change: EventHandler<String>,
    /// Fired when the user applies the edit.
    on_apply: EventHandler<()>,
}

/// Prompt input plus apply button with an in-flight spinner state.
#[component]
pub fn EditPanel(props: EditPanelProps) -> Element {
    let disabled = props.is_editing || props.prompt.trim().is_empty();
    let button_label = if props.is_editing {
        "Editing..."
    } else {
        "Apply Edit"
    };

    rsx! {
        div { class: "card edit-card",
            h3 { "AI Image Studio" }
            p { class: "card-hint",
                "Use text prompts to edit your photo (e.g., \"Add a retro filter\", \"Change the background color\")."
            }
            div { class: "edit-row",
                input {
                    r#type: "text",
                    placeholder: "Enter edit prompt...",
                    value: "{props.prompt}",
                    disabled: props.is_editing,
                    oninput: move |evt| props.on_prompt_change.call(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    disabled: disabled,
                    onclick: move |_| props.on_apply.call(()),
                    "{button_label}"
                }
            }
        }
    }
}

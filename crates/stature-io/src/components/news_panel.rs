//! Search-grounded industry news panel.

use dioxus::prelude::*;
use stature_core::NewsDigest;

/// Maximum number of grounding sources shown; the digest may carry more.
const MAX_DISPLAY_SOURCES: usize = 3;

/// Props for the [`NewsPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct NewsPanelProps {
    /// The cached digest, if one has been fetched.
    news: Option<NewsDigest>,
    /// Whether a fetch is in flight.
    is_fetching: bool,
    /// Fired when the user requests (re)loading the news.
    on_fetch: EventHandler<()>,
}

/// News digest with its supporting links.
///
/// An empty source list is a valid outcome and renders as a summary
/// without a links section.
#[component]
pub fn NewsPanel(props: NewsPanelProps) -> Element {
    let button_label = if props.is_fetching {
        "Fetching..."
    } else {
        "Fetch Latest News"
    };

    rsx! {
        div { class: "card news-card",
            div { class: "news-header",
                h3 { "Industry Insights" }
                button {
                    class: "btn btn-pill",
                    disabled: props.is_fetching,
                    onclick: move |_| props.on_fetch.call(()),
                    "{button_label}"
                }
            }

            if props.is_fetching {
                p { class: "news-loading", "Grounding results with web search..." }
            } else if let Some(ref news) = props.news {
                div { class: "news-body",
                    p { class: "news-text", "{news.text}" }
                    if !news.sources.is_empty() {
                        div { class: "news-sources",
                            p { class: "tile-label", "Sources & Links" }
                            for (i, source) in news.sources.iter().take(MAX_DISPLAY_SOURCES).enumerate() {
                                a {
                                    key: "{i}",
                                    href: "{source.uri}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{source.title}"
                                }
                            }
                        }
                    }
                }
            } else {
                p { class: "news-empty",
                    "Click to fetch the latest scientific news about body metrics."
                }
            }
        }
    }
}

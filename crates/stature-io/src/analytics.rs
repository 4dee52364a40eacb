//! Lightweight Simple Analytics event tracking.
//!
//! Calls the global `sa_event` function injected by the Simple
//! Analytics `<script>` tag.  All functions silently no-op when the
//! script is absent (e.g., blocked by an ad-blocker or during tests).

use wasm_bindgen::prelude::*;

/// Fire a Simple Analytics custom event.
///
/// Silently does nothing when the analytics script is absent.
fn track_event(name: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(func) = js_sys::Reflect::get(&window, &JsValue::from_str("sa_event")) else {
        return;
    };
    if !func.is_function() {
        return;
    }
    let func: js_sys::Function = func.unchecked_into();
    let _ = func.call1(&JsValue::NULL, &JsValue::from_str(name));
}

/// Record an analysis call outcome (`analyze_ok` / `analyze_err`).
pub fn track_analysis(success: bool) {
    track_event(if success { "analyze_ok" } else { "analyze_err" });
}

/// Record an image-edit outcome (`edit_ok` / `edit_err`).
pub fn track_edit(success: bool) {
    track_event(if success { "edit_ok" } else { "edit_err" });
}

/// Record a news-fetch outcome (`news_ok` / `news_err`).
pub fn track_news(success: bool) {
    track_event(if success { "news_ok" } else { "news_err" });
}

/// Record a saved measurement report.
pub fn track_report_saved() {
    track_event("report_saved");
}

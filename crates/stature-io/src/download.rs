//! File download for saved measurement reports.
//!
//! Dioxus has no built-in file download API.  This module triggers a
//! download by programmatically clicking a temporary `<a download>`
//! element whose `href` is a base64 data URL — the report is small
//! enough that no Blob/object-URL lifecycle is needed.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Download `svg_markup` as `filename` in the user's browser.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if any browser API call fails
/// (no window/document, element creation, cast).
pub fn download_svg(svg_markup: &str, filename: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let href = format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(svg_markup.as_bytes()),
    );

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;
    anchor.set_href(&href);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // Best-effort cleanup — the download is already initiated.
    let _ = body.remove_child(&anchor);

    Ok(())
}

//! Photo upload component with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

use crate::dataurl::{self, UploadError};

/// Allowed file extensions for photo uploads.
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Check whether a filename has an allowed image extension.
fn has_allowed_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext))
    })
}

/// Props for the [`PhotoUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PhotoUploadProps {
    /// Called with the photo encoded as a base64 data URL after a
    /// successful upload.
    on_upload: EventHandler<String>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Accepts PNG, JPEG, and WebP photos. When a file is selected (via
/// the picker or drag-and-drop), reads the bytes, verifies they really
/// are an image of an accepted format, encodes them as a data URL, and
/// fires `on_upload`. Malformed or mislabeled files are reported in
/// the drop zone without leaving the upload step.
#[component]
pub fn PhotoUpload(props: PhotoUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Validate, read, encode, and forward the first file from a list.
    //
    // Shared by the file-picker (`handle_files`) and drag-and-drop
    // (`handle_drop`) paths so the validation/encode logic lives in
    // one place.
    let process_files = move |files: Vec<FileData>| async move {
        if let Some(file) = files.first() {
            let name = file.name();
            if !has_allowed_extension(&name) {
                error.set(Some(format!("Unsupported file type: {name}")));
                return;
            }
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    error.set(Some(UploadError::ReadFailed(e.to_string()).to_string()));
                    return;
                }
            };
            match dataurl::encode_data_url(&bytes.to_vec()) {
                Ok(data_url) => {
                    error.set(None);
                    props.on_upload.call(data_url);
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "upload-zone dragging"
    } else {
        "upload-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            if let Some(ref err) = error() {
                p { class: "upload-error", "{err}" }
            }

            p { class: "upload-hint",
                strong { "Click to upload" }
                " or drag and drop"
            }

            label { class: "btn btn-primary",
                input {
                    r#type: "file",
                    accept: ".png,.jpg,.jpeg,.webp",
                    class: "hidden-input",
                    onchange: handle_files,
                }
                "Choose Photo"
            }

            p { class: "upload-formats",
                "Full body standing photo (PNG, JPEG, WebP)"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(has_allowed_extension("me.PNG"));
        assert!(has_allowed_extension("holiday.Jpeg"));
        assert!(has_allowed_extension("shot.webp"));
    }

    #[test]
    fn extension_check_rejects_others() {
        assert!(!has_allowed_extension("me.gif"));
        assert!(!has_allowed_extension("archive.tar.gz"));
        assert!(!has_allowed_extension("no_extension"));
        assert!(!has_allowed_extension(""));
    }
}

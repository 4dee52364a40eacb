//! Data-URL encoding for uploaded photos.
//!
//! The external model contract embeds images directly into API
//! requests as base64 data URLs; there is no upload endpoint. This
//! module turns raw file bytes into that form, rejecting files that
//! are not actually images before anything is sent anywhere.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;

/// Errors from turning an uploaded file into a usable photo.
///
/// All upload failures are handled locally in the upload component and
/// never reach the wizard's step machine.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The file is a real image, but not a format this app accepts.
    #[error("unsupported image format: {0}")]
    UnsupportedType(String),

    /// The browser failed to hand over the file's bytes.
    #[error("failed to read file: {0}")]
    ReadFailed(String),

    /// The bytes are not a recognizable image at all.
    #[error("file is not a readable image")]
    InvalidImage,
}

/// Image formats accepted for analysis.
const ACCEPTED_FORMATS: &[ImageFormat] =
    &[ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP];

/// Encode raw image bytes as a `data:<mime>;base64,…` URL.
///
/// Sniffs the actual format from the file's magic bytes (the filename
/// extension is not trusted), so malformed or mislabeled files are
/// rejected here instead of producing an opaque model failure later.
///
/// # Errors
///
/// [`UploadError::InvalidImage`] when the bytes are not a recognizable
/// image; [`UploadError::UnsupportedType`] for real images outside the
/// accepted set (PNG, JPEG, WebP).
pub fn encode_data_url(bytes: &[u8]) -> Result<String, UploadError> {
    let format = image::guess_format(bytes).map_err(|_| UploadError::InvalidImage)?;
    if !ACCEPTED_FORMATS.contains(&format) {
        return Err(UploadError::UnsupportedType(
            format.to_mime_type().to_owned(),
        ));
    }
    Ok(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(bytes),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Magic bytes are enough for format sniffing; no decode happens.
    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR";
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    const GIF_MAGIC: &[u8] = b"GIF89a\x01\x00\x01\x00";

    #[test]
    fn png_bytes_encode_with_png_mime() {
        let url = encode_data_url(PNG_MAGIC).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn jpeg_bytes_encode_with_jpeg_mime() {
        let url = encode_data_url(JPEG_MAGIC).unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn payload_round_trips_through_base64() {
        let url = encode_data_url(PNG_MAGIC).unwrap();
        let payload = url.split_once(',').unwrap().1;
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(decoded, PNG_MAGIC);
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(matches!(
            encode_data_url(b"definitely not an image"),
            Err(UploadError::InvalidImage)
        ));
        assert!(matches!(
            encode_data_url(&[]),
            Err(UploadError::InvalidImage)
        ));
    }

    #[test]
    fn recognized_but_unsupported_formats_are_rejected() {
        let err = encode_data_url(GIF_MAGIC).unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedType(ref mime) if mime == "image/gif"));
    }
}

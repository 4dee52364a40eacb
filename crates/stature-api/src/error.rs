//! Adapter error taxonomy.

/// Errors from the hosted-model adapters.
///
/// Calls are stateless with no retries or backoff; every variant is
/// recoverable by the user trying again. [`ApiError::NoImageReturned`]
/// is an *expected* failure mode of the edit operation (the model may
/// answer with text only) and is kept distinct from transport failure
/// so callers can message it separately.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Http(String),

    /// The service answered with a non-success status code.
    #[error("service returned status {0}")]
    Status(u16),

    /// The response body did not match the declared contract (parse
    /// failure, missing required field, or type mismatch).
    #[error("response did not match the expected schema: {0}")]
    Decode(String),

    /// The response carried no candidate with usable text content.
    #[error("response contained no text content")]
    EmptyResponse,

    /// The edit response contained no inline image part.
    #[error("no image data returned from model")]
    NoImageReturned,

    /// The supplied image was not a base64 data URL.
    #[error("image is not a base64 data URL")]
    MalformedImage,
}

//! Cover image decoding.
//!
//! The upload widget posts the cover as a JSON string of the form
//! `{"type": "image/png", "data": "<base64>"}`. Only a fixed set of image
//! types is stored; anything else is dropped without failing the request.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use crate::error::CoreError;

/// Image types accepted for covers.
///
/// GIF is deliberately absent: GIF uploads are dropped like any other
/// unsupported type.
pub const ACCEPTED_COVER_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Check whether a MIME type may be stored as a cover.
pub fn is_accepted_cover_type(mime_type: &str) -> bool {
    ACCEPTED_COVER_TYPES.contains(&mime_type)
}

/// A decoded cover ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    pub image: Vec<u8>,
    pub image_type: String,
}

impl Cover {
    /// Render the cover as a `data:` URI for an `<img src>` attribute.
    pub fn data_uri(image: &[u8], image_type: &str) -> String {
        format!("data:{image_type};base64,{}", STANDARD.encode(image))
    }
}

/// Decode an encoded cover field.
///
/// - Any JSON value without an accepted `type` (including `null`, non-objects
///   and types outside [`ACCEPTED_COVER_TYPES`]) yields `Ok(None)`.
/// - Text that is not JSON is a validation error.
/// - Once the type is accepted, `data` must be a base64 string.
pub fn decode_cover(encoded: &str) -> Result<Option<Cover>, CoreError> {
    let payload: Value = serde_json::from_str(encoded)
        .map_err(|e| CoreError::Validation(format!("Malformed cover payload: {e}")))?;

    let Some(mime_type) = payload
        .get("type")
        .and_then(Value::as_str)
        .filter(|t| is_accepted_cover_type(t))
    else {
        return Ok(None);
    };

    let data = payload
        .get("data")
        .and_then(Value::as_str)
        .ok_or_else(|| CoreError::Validation("Cover payload has no data".to_string()))?;
    let image = STANDARD
        .decode(data.as_bytes())
        .map_err(|e| CoreError::Validation(format!("Malformed cover data: {e}")))?;

    Ok(Some(Cover {
        image,
        image_type: mime_type.to_string(),
    }))
}

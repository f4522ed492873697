//! Image payload classification
//!
//! Two independent classifiers with different trust levels, composed by
//! priority:
//!
//! 1. **Declared MIME** - a data URL's `<mime-type>` segment is returned
//!    verbatim, trusted without cross-checking the bytes. This is what lets
//!    SVG and ICO (no fixed binary signature) be classified at all.
//! 2. **Byte signature** - raw base64 blobs carry no metadata, so the decoded
//!    bytes are sniffed against the magic-number table.
//!
//! Callers that need byte-level confirmation of a declared MIME type must
//! decode and re-check explicitly.

pub mod data_url;
pub mod image_format;

pub use data_url::DataUrl;
pub use image_format::{detect_image_format, ImageFormat};

use crate::decoder;
use crate::errors::PayloadError;

/// Outcome of classifying one payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// MIME type declared by a data URL, trusted verbatim
    Declared(String),
    /// Format sniffed from the decoded payload's leading bytes
    Signature(ImageFormat),
}

impl Detection {
    /// MIME type string for this detection
    pub fn mime_type(&self) -> &str {
        match self {
            Detection::Declared(mime) => mime,
            Detection::Signature(format) => format.mime_type(),
        }
    }

    /// Map onto the closed format set, when the MIME type is known
    ///
    /// Returns `None` for a declared MIME type outside the extension table;
    /// conversion reports that case as `PayloadError::Unsupported`.
    pub fn image_format(&self) -> Option<ImageFormat> {
        match self {
            Detection::Declared(mime) => ImageFormat::from_mime(mime),
            Detection::Signature(format) => Some(*format),
        }
    }
}

/// Classify a raw base64 string or data URL
///
/// Detection is pure and idempotent: the same input always yields the same
/// result. An unclassifiable input is reported as `PayloadError::Undetected`,
/// never a panic - malformed base64 merely decodes to a buffer no signature
/// matches.
pub fn detect(input: &str) -> Result<Detection, PayloadError> {
    // Fast path: trust the declared MIME without decoding the body
    if let Some(url) = data_url::parse(input) {
        return Ok(Detection::Declared(url.mime.to_string()));
    }

    let bytes = decoder::decode_lenient(input);
    detect_image_format(&bytes)
        .map(Detection::Signature)
        .ok_or(PayloadError::Undetected)
}

//! Image format detection from magic bytes
//!
//! Classifies raw bytes into an image format family by inspecting leading
//! signature bytes, independent of any declared MIME type. Detection is
//! conservative: it requires the full signature window, so truncated buffers
//! never match and never fault.

use serde::{Deserialize, Serialize};

/// Image formats this tool can write to disk
///
/// Closed set: an unknown signature yields `None` from detection, never a new
/// variant. Every format maps 1:1 to a canonical MIME string and a file
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    /// JPEG image (magic: FF D8 FF)
    Jpeg,
    /// PNG image (magic: 89 50 4E 47 0D 0A 1A 0A)
    Png,
    /// GIF image (magic: GIF8, covers GIF87a and GIF89a)
    Gif,
    /// WebP image (magic: RIFF....WEBP)
    WebP,
    /// BMP image (magic: BM)
    Bmp,
    /// TIFF image (magic: 49 49 2A 00 or 4D 4D 00 2A)
    Tiff,
    /// SVG image (XML-based, no binary signature; declared MIME only)
    Svg,
    /// ICO icon (no reliable binary signature; declared MIME only)
    Ico,
}

impl ImageFormat {
    /// Get the file extension for this image format (without leading dot)
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
            ImageFormat::WebP => "webp",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Tiff => "tiff",
            ImageFormat::Svg => "svg",
            ImageFormat::Ico => "ico",
        }
    }

    /// Get the canonical MIME type for this image format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Tiff => "image/tiff",
            ImageFormat::Svg => "image/svg+xml",
            ImageFormat::Ico => "image/x-icon",
        }
    }

    /// Map a declared MIME type onto the closed format set
    ///
    /// Accepts the common aliases seen in the wild (`image/jpg`, `image/ico`,
    /// `image/vnd.microsoft.icon`). Matching is case-sensitive: a data URL
    /// declaring `image/PNG` does not map and is reported as unsupported.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim() {
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            "image/gif" => Some(ImageFormat::Gif),
            "image/webp" => Some(ImageFormat::WebP),
            "image/bmp" => Some(ImageFormat::Bmp),
            "image/tiff" => Some(ImageFormat::Tiff),
            "image/svg+xml" => Some(ImageFormat::Svg),
            "image/ico" | "image/x-icon" | "image/vnd.microsoft.icon" => Some(ImageFormat::Ico),
            _ => None,
        }
    }
}

/// Detect an image format from binary data using magic bytes
///
/// Signatures are checked in fixed priority order; the first match wins. A
/// buffer shorter than a signature window is treated as non-matching for that
/// signature. SVG and ICO carry no reliable binary signature and are only
/// ever classified via a data URL's declared MIME type, so this function
/// never returns them.
pub fn detect_image_format(data: &[u8]) -> Option<ImageFormat> {
    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(ImageFormat::Jpeg);
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some(ImageFormat::Png);
    }

    // GIF: "GIF8" prefix covers both GIF87a and GIF89a
    if data.starts_with(b"GIF8") {
        return Some(ImageFormat::Gif);
    }

    // WebP: RIFF container with WEBP fourcc at offset 8
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some(ImageFormat::WebP);
    }

    // BMP: BM
    if data.starts_with(b"BM") {
        return Some(ImageFormat::Bmp);
    }

    // TIFF: 49 49 2A 00 (little-endian) or 4D 4D 00 2A (big-endian)
    if data.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A]) {
        return Some(ImageFormat::Tiff);
    }

    None
}

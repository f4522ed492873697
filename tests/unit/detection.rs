//! Detection behaviour through the public API

use crate::common;
use b64image::decoder;
use b64image::detection::{self, Detection, ImageFormat};
use b64image::errors::PayloadError;

#[test]
fn every_sniffable_format_detects_with_trailing_bytes() {
    let cases = [
        (common::jpeg_bytes(), ImageFormat::Jpeg),
        (common::png_bytes(), ImageFormat::Png),
        (common::gif_bytes(), ImageFormat::Gif),
        (common::webp_bytes(), ImageFormat::WebP),
        (common::bmp_bytes(), ImageFormat::Bmp),
        (common::tiff_bytes(), ImageFormat::Tiff),
    ];

    for (bytes, expected) in cases {
        // Arbitrary trailing bytes after the signature must not matter
        let mut padded = bytes.clone();
        padded.extend_from_slice(&[0xAB; 32]);
        let detection = detection::detect(&common::to_base64(&padded)).unwrap();
        assert_eq!(
            detection,
            Detection::Signature(expected),
            "failed for {:?}",
            expected
        );
    }
}

#[test]
fn declared_mime_wins_without_decoding() {
    // The body decodes to PNG bytes, but the declaration says otherwise and
    // the declaration is what callers get back
    let url = common::to_data_url("image/webp", &common::png_bytes());
    let detection = detection::detect(&url).unwrap();
    assert_eq!(detection.mime_type(), "image/webp");
    assert_eq!(detection.image_format(), Some(ImageFormat::WebP));
}

#[test]
fn declared_mime_outside_closed_set_is_reported_verbatim() {
    let url = common::to_data_url("image/heic", &common::png_bytes());
    let detection = detection::detect(&url).unwrap();
    assert_eq!(detection.mime_type(), "image/heic");
    // ...but has no extension mapping
    assert_eq!(detection.image_format(), None);
}

#[test]
fn svg_and_ico_classify_only_via_data_url() {
    let svg_url = common::to_data_url("image/svg+xml", b"<svg xmlns='x'/>");
    assert_eq!(
        detection::detect(&svg_url).unwrap().image_format(),
        Some(ImageFormat::Svg)
    );

    // The same bytes as a bare payload have no signature to sniff
    let bare = common::to_base64(b"<svg xmlns='x'/>");
    assert_eq!(detection::detect(&bare), Err(PayloadError::Undetected));
}

#[test]
fn garbage_input_reports_undetected() {
    assert_eq!(
        detection::detect("not base64 at all !!"),
        Err(PayloadError::Undetected)
    );
}

#[test]
fn detection_is_idempotent_per_payload() {
    let payloads = [
        common::one_by_one_png_data_url(),
        common::to_base64(&common::jpeg_bytes()),
    ];
    for payload in &payloads {
        assert_eq!(detection::detect(payload), detection::detect(payload));
    }
}

#[test]
fn estimated_size_matches_real_decode() {
    let url = common::one_by_one_png_data_url();
    let decoded = decoder::decode_payload(&url).unwrap();
    assert_eq!(decoder::estimated_decoded_len(&url), decoded.len());
    // And the decode really is the PNG it claims to be
    assert!(decoded.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]));
}

//! Lenient base64 decoding and payload plumbing
//!
//! Whole-payload, in-memory decoding. There is no streaming here: a payload
//! is decoded in one shot and handed to the caller as a byte buffer.

use base64::{
    alphabet,
    engine::{self, general_purpose::GeneralPurpose, Engine, GeneralPurposeConfig},
};

use crate::detection::data_url;
use crate::errors::PayloadError;

/// Base64 decoder with lenient padding
///
/// This is the canonical base64 decoder for the whole crate. Payloads scraped
/// out of markup frequently lose their trailing `=` padding to attribute
/// quoting or entity encoding, which makes
/// `base64::engine::general_purpose::STANDARD.decode()` fail. This engine
/// accepts both padded and unpadded input.
pub const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(engine::DecodePaddingMode::Indifferent),
);

/// Decode base64 permissively
///
/// ASCII whitespace is stripped first (line-wrapped payloads are common in
/// files), then only the leading run of base64 alphabet characters is
/// decoded: everything from the first disallowed character onward is
/// discarded, and a trailing partial quantum is dropped. Never errors - a
/// genuinely non-base64 string yields an empty buffer.
pub fn decode_lenient(input: &str) -> Vec<u8> {
    let compact: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let valid_len = compact
        .bytes()
        .position(|b| !(b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'='))
        .unwrap_or(compact.len());
    let mut candidate = &compact[..valid_len];

    // A final quantum of one character encodes no complete byte
    if candidate.len() % 4 == 1 {
        candidate = &candidate[..candidate.len() - 1];
    }

    BASE64_LENIENT.decode(candidate).unwrap_or_default()
}

/// Strip a data-URL envelope, leaving the bare base64 body
///
/// Inputs that are not data URLs pass through trimmed but otherwise
/// untouched.
pub fn extract_payload(input: &str) -> &str {
    match data_url::parse(input) {
        Some(url) => url.payload,
        None => input.trim(),
    }
}

/// Decode one payload for conversion
///
/// Empty input (after trimming) and decodes yielding zero usable bytes are
/// reported as `Malformed` - a payload that cannot be decoded is never
/// silently skipped.
pub fn decode_payload(input: &str) -> Result<Vec<u8>, PayloadError> {
    let body = extract_payload(input);
    if body.trim().is_empty() {
        return Err(PayloadError::Malformed("empty payload".to_string()));
    }

    let bytes = decode_lenient(body);
    if bytes.is_empty() {
        return Err(PayloadError::Malformed(
            "base64 decoding produced no bytes".to_string(),
        ));
    }
    Ok(bytes)
}

/// Estimate the decoded size of a payload without decoding it
///
/// Arithmetic on the base64 body length: three bytes per four characters,
/// less any trailing padding. Used by the declared-MIME fast path, which by
/// contract does not decode the body.
pub fn estimated_decoded_len(input: &str) -> usize {
    let body = extract_payload(input);
    let padding = body.bytes().rev().take_while(|&b| b == b'=').count();
    body.len().saturating_sub(padding) * 3 / 4
}

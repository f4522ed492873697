//! Data-URL parsing
//!
//! Splits a `data:<mime-type>;base64,<payload>` string into its declared MIME
//! type and base64 body. This is deliberately shape-only parsing: the MIME
//! type is not validated against any registry and the body is not decoded.

/// Borrowed view of a data URL's two interesting parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUrl<'a> {
    /// Declared MIME type, verbatim as it appears between `data:` and `;base64,`
    pub mime: &'a str,
    /// Base64 body after the `;base64,` marker
    pub payload: &'a str,
}

/// Parse the data-URL shape, returning `None` when `input` is not one
///
/// The MIME segment must be non-empty and must not itself contain `;`, so
/// parameterised forms like `data:image/png;charset=utf-8;base64,...` are not
/// recognised.
pub fn parse(input: &str) -> Option<DataUrl<'_>> {
    let rest = input.trim().strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    if mime.is_empty() || mime.contains(';') {
        return None;
    }
    Some(DataUrl { mime, payload })
}

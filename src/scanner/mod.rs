//! Base64 image payload scanning
//!
//! Locates candidate `data:image/...;base64,...` payloads inside arbitrary
//! text or markup using layered pattern matching. Plain mode applies the bare
//! data-URL pattern; HTML mode additionally applies a table of context
//! patterns, one per HTML/CSS construct known to embed data URLs. Each
//! context row pairs an outer pattern with an inner capture group holding the
//! payload itself, so supporting a new construct is a one-line addition.
//!
//! The base64 character class is authoritative: a candidate's body ends at
//! the first character outside `[A-Za-z0-9+/=]`. Whitespace or an HTML entity
//! directly after a payload truncates the match there.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Ordered, deduplicated payload strings in order of first appearance
pub type ScanResult = Vec<String>;

/// How a scan treats its input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Bare data-URL pattern only
    Plain,
    /// Plain pattern plus the HTML/CSS context patterns
    Html,
}

lazy_static! {
    /// Bare data-URL image payload, matchable anywhere in the text
    static ref DATA_URL: Regex =
        Regex::new(r"data:image/[^;]+;base64,[A-Za-z0-9+/=]+").unwrap();

    /// HTML/CSS constructs embedding a data URL; capture group 1 is the
    /// payload with the surrounding attribute/declaration syntax discarded
    static ref HTML_CONTEXTS: Vec<Regex> = vec![
        // src="..." / src='...'
        Regex::new(r#"src=["'](data:image/[^;]+;base64,[A-Za-z0-9+/=]+)["']"#).unwrap(),
        // background-image: url(...)
        Regex::new(
            r#"background-image:\s*url\(['"]?(data:image/[^;]+;base64,[A-Za-z0-9+/=]+)['"]?\)"#
        )
        .unwrap(),
        // style="... url(...) ..."
        Regex::new(
            r#"style=["'][^"']*url\(['"]?(data:image/[^;]+;base64,[A-Za-z0-9+/=]+)['"]?\)"#
        )
        .unwrap(),
        // content: url(...)
        Regex::new(r#"content:\s*url\(['"]?(data:image/[^;]+;base64,[A-Za-z0-9+/=]+)['"]?\)"#)
            .unwrap(),
    ];
}

/// Scan text for embedded base64 image payloads
///
/// Candidates are deduplicated by exact string value with order-preserving
/// set semantics: the same image embedded twice yields one entry, two
/// different images always yield two. Zero matches yield an empty result;
/// the caller decides whether to treat the whole input as one raw payload.
pub fn scan(text: &str, mode: ScanMode) -> ScanResult {
    let mut seen = HashSet::new();
    let mut payloads = Vec::new();
    let mut push = |candidate: &str| {
        if seen.insert(candidate.to_string()) {
            payloads.push(candidate.to_string());
        }
    };

    for m in DATA_URL.find_iter(text) {
        push(m.as_str());
    }

    if mode == ScanMode::Html {
        for pattern in HTML_CONTEXTS.iter() {
            for caps in pattern.captures_iter(text) {
                if let Some(inner) = caps.get(1) {
                    push(inner.as_str());
                }
            }
        }
    }

    payloads
}

/// Heuristic for whether text is HTML
///
/// A leading `<!doctype` (case-insensitive) or an `<html` tag anywhere
/// counts. Callers holding a declared content type should choose the mode
/// themselves; `scan` trusts whatever mode it is given.
pub fn is_html(text: &str) -> bool {
    let head = text.trim_start();
    if head
        .get(..9)
        .map_or(false, |p| p.eq_ignore_ascii_case("<!doctype"))
    {
        return true;
    }
    text.to_ascii_lowercase().contains("<html")
}

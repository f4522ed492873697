//! CLI commands and the input plumbing they share

use crate::errors::{AppError, AppResult, PayloadError};
use crate::scanner::{self, ScanMode, ScanResult};
use crate::source::{InputSource, ResolvedInput};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

pub mod convert;
pub mod detect;

/// Input selection shared by convert and detect
#[derive(Args)]
pub struct InputArgs {
    /// Base64 string or data URL to process
    pub payload: Option<String>,

    /// Read input from a local file instead
    #[arg(long, conflicts_with = "payload")]
    pub file: Option<PathBuf>,

    /// Fetch input from a URL instead
    #[arg(long, conflicts_with_all = ["payload", "file"])]
    pub url: Option<String>,
}

impl InputArgs {
    /// Resolve which source the user selected
    pub fn source(&self) -> AppResult<InputSource> {
        if let Some(url) = &self.url {
            Ok(InputSource::Url(url.clone()))
        } else if let Some(file) = &self.file {
            Ok(InputSource::File(file.clone()))
        } else if let Some(payload) = &self.payload {
            Ok(InputSource::Inline(payload.clone()))
        } else {
            Err(AppError::Config(
                "no input given: pass a payload argument, --file, or --url".to_string(),
            ))
        }
    }
}

/// Gather the payloads a command will work through
///
/// A non-HTML inline or file source with no data-URL matches is treated as a
/// single raw base64 payload. An HTML source (or a fetched page) with no
/// matches has genuinely nothing to extract and is reported as `NoPayloads`.
pub fn collect_payloads(source: &InputSource, resolved: &ResolvedInput) -> AppResult<ScanResult> {
    let mode = if resolved.html {
        ScanMode::Html
    } else {
        ScanMode::Plain
    };

    let found = scanner::scan(&resolved.text, mode);
    if !found.is_empty() {
        info!("found {} embedded payload(s)", found.len());
        return Ok(found);
    }

    match source {
        InputSource::Inline(_) | InputSource::File(_) if !resolved.html => {
            Ok(vec![resolved.text.trim().to_string()])
        }
        _ => Err(PayloadError::NoPayloads.into()),
    }
}

//! Input source resolution
//!
//! Supplies the single text string a scan operates on - from a CLI argument,
//! a UTF-8 file, or a fetched URL body - together with a flag saying whether
//! the source should be scanned as HTML. The scanning core trusts that flag;
//! all heuristics live here.

use crate::config::FetchConfig;
use crate::errors::AppResult;
use crate::scanner;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Where the input text comes from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Positional CLI argument
    Inline(String),
    /// Local file, read as UTF-8
    File(PathBuf),
    /// Remote page fetched over HTTP
    Url(String),
}

/// Text to scan plus the HTML flag the scanner trusts
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    pub text: String,
    pub html: bool,
}

impl InputSource {
    /// Load the source into memory
    ///
    /// The HTML flag comes from the strongest signal available per source:
    /// the `Content-Type` header for URLs, the file extension for files, and
    /// a content sniff everywhere as fallback. Fetches use the configured
    /// timeout with no retries; a failed fetch means the data never arrived.
    pub async fn resolve(&self, fetch: &FetchConfig) -> AppResult<ResolvedInput> {
        match self {
            InputSource::Inline(text) => Ok(ResolvedInput {
                html: scanner::is_html(text),
                text: text.clone(),
            }),
            InputSource::File(path) => {
                let text = std::fs::read_to_string(path)?;
                debug!("read {} bytes from {}", text.len(), path.display());
                let by_extension = matches!(
                    path.extension().and_then(|e| e.to_str()),
                    Some("html") | Some("htm")
                );
                let html = by_extension || scanner::is_html(&text);
                Ok(ResolvedInput { text, html })
            }
            InputSource::Url(url) => {
                let client = reqwest::Client::builder()
                    .timeout(Duration::from_secs(fetch.timeout_seconds))
                    .user_agent(fetch.user_agent.clone())
                    .build()?;
                let response = client.get(url).send().await?.error_for_status()?;
                let declared_html = response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .map(|value| value.starts_with("text/html"))
                    .unwrap_or(false);
                let text = response.text().await?;
                info!("fetched {} bytes from {}", text.len(), url);
                Ok(ResolvedInput {
                    html: declared_html || scanner::is_html(&text),
                    text,
                })
            }
        }
    }
}

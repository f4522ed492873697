//! File output for converted images
//!
//! Persists decoded image buffers under a base directory with proper
//! collision handling. The conversion core never touches the filesystem; it
//! hands a buffer, a name and an extension to this writer.

use std::fs;
use std::path::{Path, PathBuf};

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Output-specific error types
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file name: {0}")]
    InvalidName(String),
}

/// Writes decoded image buffers into a target directory
///
/// Filename collisions are this writer's responsibility: when
/// `<stem>.<ext>` already exists the write falls back to `<stem>_1.<ext>`,
/// `<stem>_2.<ext>`, and so on, so a batch of payloads sharing one stem lands
/// as a numbered series.
pub struct OutputWriter {
    base_dir: PathBuf,
}

impl OutputWriter {
    /// Create a writer rooted at `base_dir` (created lazily on first write)
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the target directory path
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Persist one decoded image, returning the path actually written
    pub fn write_image(&self, stem: &str, extension: &str, data: &[u8]) -> OutputResult<PathBuf> {
        if stem.is_empty() || stem.contains(std::path::is_separator) {
            return Err(OutputError::InvalidName(stem.to_string()));
        }

        fs::create_dir_all(&self.base_dir)?;
        let filepath = self.next_available_path(stem, extension);
        fs::write(&filepath, data)?;
        Ok(filepath)
    }

    /// First non-colliding path for this stem/extension pair
    fn next_available_path(&self, stem: &str, extension: &str) -> PathBuf {
        let first = self.base_dir.join(format!("{}.{}", stem, extension));
        if !first.exists() {
            return first;
        }

        let mut counter = 1;
        loop {
            let candidate = self
                .base_dir
                .join(format!("{}_{}.{}", stem, counter, extension));
            if !candidate.exists() {
                return candidate;
            }
            counter += 1;
        }
    }
}

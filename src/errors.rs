use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP fetch of a remote page
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Data validation/encoding
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Payload scanning/detection/decoding
    #[error("Payload error: {0}")]
    Payload(#[from] PayloadError),

    /// File output
    #[error("Output error: {0}")]
    Output(#[from] crate::output::OutputError),

    /// Batch conversion where some payloads failed after all were attempted
    #[error("{failed} of {total} payloads failed to convert")]
    PartialFailure { failed: usize, total: usize },
}

/// Failures the extraction core signals distinctly
///
/// All of these are local, recoverable conditions: a batch run logs the
/// failing payload and moves on to the next one, then reports the combined
/// outcome. None of them abort the process on their own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// Byte signature and declared MIME type both failed to identify a format
    #[error("could not detect an image format")]
    Undetected,

    /// A MIME type was identified but has no file extension mapping
    #[error("unsupported image type: {mime}")]
    Unsupported { mime: String },

    /// Base64 decoding produced zero usable bytes, or input was empty
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// A scan over HTML/text yielded zero candidate data URLs
    #[error("no image payloads found in input")]
    NoPayloads,
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

// Additional From implementations for common error types
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Fetch(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

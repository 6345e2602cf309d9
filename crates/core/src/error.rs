//! Error types for readscore operations.
//!
//! This module defines the main error type [`ReadscoreError`] which represents
//! every failure point of the pipeline: fetching the page, extracting its
//! text, and writing the report.
//!
//! # Example
//!
//! ```rust
//! use readscore_core::{ReadscoreError, Result};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     if text.trim().is_empty() {
//!         return Err(ReadscoreError::NoContent);
//!     }
//!     Ok(text)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for readability analysis.
///
/// # Example
///
/// ```rust
/// use readscore_core::{ReadscoreError, analyze_html};
///
/// match analyze_html("<html><body></body></html>") {
///     Ok(report) => println!("Ease: {}", report.metrics.flesch_reading_ease),
///     Err(ReadscoreError::NoContent) => println!("Nothing to score"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ReadscoreError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps connection refusals, DNS failures and body decoding errors.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP request to {url} returned status {status}")]
    HttpStatus { status: u16, url: String },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The page has no words to score.
    ///
    /// Returned when the extracted text is empty or consists only of
    /// punctuation, which would otherwise divide every formula by zero.
    #[error("No readable text could be extracted from the document")]
    NoContent,

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    ///
    /// Wraps standard I/O errors for report output and file input.
    #[error("File I/O failed: {0}")]
    WriteError(#[from] std::io::Error),

    /// Report serialization errors.
    #[error("Failed to serialize report: {0}")]
    SerializeError(#[from] serde_json::Error),
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for ReadscoreError {
    fn from(err: reqwest::Error) -> Self {
        ReadscoreError::HttpError(err)
    }
}

/// Result type alias for ReadscoreError.
pub type Result<T> = std::result::Result<T, ReadscoreError>;

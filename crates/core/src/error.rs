//! Error types for sitegraft operations.
//!
//! This module defines the main error type [`SitegraftError`] which represents
//! all possible errors that can occur during document discovery, content
//! extraction, sanitization, and page generation.
//!
//! # Example
//!
//! ```rust
//! use sitegraft_core::{Result, SitegraftError};
//!
//! fn extract_body(html: &str) -> Result<String> {
//!     if html.is_empty() {
//!         return Err(SitegraftError::NoContent);
//!     }
//!     // ... extraction logic
//!     # Ok(String::new())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for import pipeline operations.
///
/// Per-document conditions ([`NoContent`](SitegraftError::NoContent),
/// [`NotReadable`](SitegraftError::NotReadable)) are recoverable: the driver
/// records them and moves on to the next document. Filesystem conditions
/// ([`MirrorRootNotFound`](SitegraftError::MirrorRootNotFound),
/// [`Io`](SitegraftError::Io)) indicate environment misconfiguration and
/// abort the run.
#[derive(Error, Debug)]
pub enum SitegraftError {
    /// No content could be extracted from a document.
    ///
    /// Returned when the document is empty or contains no suitable content
    /// candidates. The driver logs a warning and skips the document.
    #[error("No content could be extracted from the document")]
    NoContent,

    /// Content is not readable (score below threshold).
    ///
    /// Returned by the heuristic extractor when no element meets the minimum
    /// readability score. Typical for navigation pages and stub documents.
    #[error("Content is not readable (score {score} below threshold {threshold})")]
    NotReadable { score: f64, threshold: f64 },

    /// HTML parsing errors.
    ///
    /// Returned when markup cannot be parsed or rewritten, often due to an
    /// invalid CSS selector or a rewriter failure.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// Invalid URL provided.
    ///
    /// Returned when a synthetic origin URL cannot be assembled for a
    /// mirrored document.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The configured mirror root does not exist or is not a directory.
    #[error("Mirror root not found: {0}")]
    MirrorRootNotFound(PathBuf),

    /// File read/write errors.
    ///
    /// Wraps standard I/O errors for mirror reads and page writes.
    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for SitegraftError.
///
/// This is a convenience alias for `std::result::Result<T, SitegraftError>`.
pub type Result<T> = std::result::Result<T, SitegraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SitegraftError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_not_readable_error() {
        let err = SitegraftError::NotReadable { score: 5.0, threshold: 10.0 };
        assert!(err.to_string().contains("5"));
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_mirror_root_error() {
        let err = SitegraftError::MirrorRootNotFound(PathBuf::from("/missing/mirror"));
        assert!(err.to_string().contains("/missing/mirror"));
    }
}

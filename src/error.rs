//! Error types with actionable diagnostics.
//!
//! All errors include contextual information to help users resolve issues
//! without needing to consult external documentation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for trazar operations.
pub type Result<T> = std::result::Result<T, TrazarError>;

/// Errors that can occur while reconstructing or rendering a matrix.
///
/// Every failure is fatal: the tool either produces the image or terminates
/// with one of these.
#[derive(Error, Debug)]
pub enum TrazarError {
    /// Input log not found at the expected path.
    #[error("Input log not found: {path}\n  → Point trazar at the training log that contains the dumped matrix")]
    InputNotFound { path: PathBuf },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The log did not yield exactly classes² integer tokens.
    #[error("Token count mismatch: expected {expected} integers for a {classes}x{classes} matrix, got {actual}\n  → Check that the log contains the complete matrix dump and nothing was clipped")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        classes: usize,
    },

    /// Class count of zero makes an empty matrix.
    #[error("Invalid class count: {value} (must be > 0)")]
    InvalidClassCount { value: usize },

    /// Rendering backend failure.
    #[error("Render error: {message}\n  → Check that the output path is writable")]
    Render { message: String },
}

impl TrazarError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Create a render error from any backend failure.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render { message: message.into() }
    }

    /// Check if this error is user-recoverable (bad path or bad log, as
    /// opposed to an internal rendering failure).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InputNotFound { .. }
                | Self::ShapeMismatch { .. }
                | Self::InvalidClassCount { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_is_actionable() {
        let err = TrazarError::InputNotFound { path: "errors.txt".into() };
        let msg = err.to_string();
        assert!(msg.contains("errors.txt"));
        assert!(msg.contains("training log"));
    }

    #[test]
    fn test_shape_mismatch_names_both_counts() {
        let err = TrazarError::ShapeMismatch { expected: 10_000, actual: 9_999, classes: 100 };
        let msg = err.to_string();
        assert!(msg.contains("10000"));
        assert!(msg.contains("9999"));
        assert!(msg.contains("100x100"));
    }

    #[test]
    fn test_io_error_constructor() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = TrazarError::io("reading errors.txt", io_err);
        assert!(matches!(err, TrazarError::Io { .. }));
        assert!(err.to_string().contains("reading errors.txt"));
    }

    #[test]
    fn test_user_errors_are_recoverable() {
        assert!(TrazarError::InputNotFound { path: "".into() }.is_user_error());
        assert!(TrazarError::InvalidClassCount { value: 0 }.is_user_error());
        assert!(!TrazarError::render("backend failure").is_user_error());
    }
}

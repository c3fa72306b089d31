//! Error types for the assertion harness.

use thiserror::Error;

/// Errors that can occur while loading expectations or finishing a verification.
#[derive(Debug, Error)]
pub enum AssertError {
    /// Error reading an expected-failures file.
    #[error("failed to load expected failures: {path}: {message}")]
    Load { path: String, message: String },

    /// Error parsing an expected-failures file.
    #[error("failed to parse expected failures: {path}: {message}")]
    Parse { path: String, message: String },

    /// Soft verification finished with unexpected failures.
    #[error("{count} check(s) regressed\n{summary}")]
    Regressions { count: usize, summary: String },
}

/// Result type for harness operations.
pub type AssertResult<T> = Result<T, AssertError>;

//! Typed errors for jpf-trace-reader.
//!
//! Provides structured error types instead of anyhow for better
//! library ergonomics and pattern matching.

use thiserror::Error;

/// Top-level error type for jpf-trace-reader operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Structural error in the trace log.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// IO error while reading the input stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error during trace export.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A precondition violation in the trace log's structure.
///
/// These indicate a malformed or truncated log; processing aborts
/// immediately with no partial output recovery. `line` is 1-based.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A transition header appeared before any trace header.
    #[error("Line {line}: transition header with no open trace")]
    TransitionOutsideTrace { line: usize },

    /// A code line appeared before any trace header.
    #[error("Line {line}: code line with no open trace")]
    CodeOutsideTrace { line: usize },

    /// A code line appeared before any transition header in the open trace.
    #[error("Line {line}: code line with no open transition")]
    CodeOutsideTransition { line: usize },

    /// A method line was expected to annotate a code entry, but none exists.
    #[error("Line {line}: method annotation with no code entry to attach to")]
    MethodWithoutCode { line: usize },

    /// A results marker appeared with no open trace.
    #[error("Line {line}: results marker with no open trace")]
    ResultsOutsideTrace { line: usize },

    /// A captured id did not fit the numeric type.
    #[error("Line {line}: invalid number '{value}': {reason}")]
    InvalidNumber {
        line: usize,
        value: String,
        reason: String,
    },
}

/// Result type alias using jpf-trace-reader's Error.
pub type Result<T> = std::result::Result<T, Error>;

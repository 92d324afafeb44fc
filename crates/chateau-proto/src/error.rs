//! Error types for the protocol crate.
//!
//! Parsing failures are split into structural errors, which carry the byte
//! position where recognition stopped, and I/O errors bubbled up from the
//! underlying stream. End of input is not an error; see
//! [`Parsed::EndOfInput`](crate::Parsed::EndOfInput).

use thiserror::Error;

/// Errors returned by [`Parser::parse`](crate::Parser::parse).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The line violates the message grammar.
    #[error("syntax error at byte {position}: {reason}")]
    Syntax {
        /// Number of bytes consumed when the error was detected.
        position: u32,
        /// Human-readable reason, for diagnostics only.
        reason: &'static str,
    },

    /// More than [`MAX_PARAMS`](crate::MAX_PARAMS) parameters were given.
    #[error("too many parameters at byte {position} (limit: {limit})")]
    TooManyParams {
        /// Number of bytes consumed when the error was detected.
        position: u32,
        /// Maximum allowed parameter count.
        limit: usize,
    },

    /// The line grew past the configured length before its terminator.
    #[error("message too long (limit: {limit} bytes)")]
    TooLong {
        /// Maximum allowed line length.
        limit: usize,
    },

    /// The underlying stream failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Returns true for grammar violations, false for stream failures.
    #[inline]
    pub fn is_structural(&self) -> bool {
        !matches!(self, ParseError::Io(_))
    }

    /// Static label for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Syntax { .. } => "syntax",
            Self::TooManyParams { .. } => "too_many_params",
            Self::TooLong { .. } => "too_long",
            Self::Io(_) => "io",
        }
    }
}

/// Errors returned when rendering a numeric reply from its template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// The reply has no canonical template and must be built by the caller.
    #[error("reply {code} has no template")]
    NoTemplate {
        /// Numeric code of the reply.
        code: u16,
    },

    /// Wrong number of arguments for the template.
    #[error("reply {code} expects {expected} arguments, got {got}")]
    ArgCount {
        /// Numeric code of the reply.
        code: u16,
        /// Arguments the template consumes.
        expected: usize,
        /// Arguments supplied.
        got: usize,
    },

    /// An argument did not match its placeholder kind.
    #[error("reply {code} argument {index} should be {expected}")]
    ArgKind {
        /// Numeric code of the reply.
        code: u16,
        /// Zero-based argument index.
        index: usize,
        /// Placeholder kind that was expected.
        expected: &'static str,
    },
}

//! Scan errors.

use stache_ir::{DelimiterError, Span};
use thiserror::Error;

/// Why a `{{=...=}}` tag could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelimiterChangeError {
    /// The tag did not contain exactly two whitespace-separated tokens.
    #[error("expected two delimiters separated by whitespace, found {0}")]
    Arity(usize),
    #[error(transparent)]
    Invalid(#[from] DelimiterError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A tag was opened and the input ended before its close delimiter.
    #[error("unclosed tag: expected `{expected}` before end of template")]
    UnclosedTag { span: Span, expected: String },
    /// A delimiter-change tag was malformed.
    #[error("invalid delimiter change: {reason}")]
    InvalidDelimiters {
        span: Span,
        reason: DelimiterChangeError,
    },
}

impl ScanError {
    /// Where the error was detected.
    pub fn span(&self) -> Span {
        match self {
            ScanError::UnclosedTag { span, .. } | ScanError::InvalidDelimiters { span, .. } => *span,
        }
    }
}

//! Parse error types.
//!
//! Every failure carries the span where it was detected and a structured
//! [`ParseErrorKind`], so callers can match on what went wrong and point
//! at the offending tag.

use stache_ir::Span;
use stache_scan::{DelimiterChangeError, ScanError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A tag was opened and never closed.
    #[error("unclosed tag: expected `{expected}` before end of template")]
    UnclosedTag { expected: String },
    /// `{{=...=}}` did not name a valid delimiter pair.
    #[error("invalid delimiter change: {0}")]
    InvalidDelimiters(DelimiterChangeError),
    /// A tag that needs a name had none, e.g. `{{}}` or `{{#}}`.
    #[error("tag requires a name")]
    EmptyName,
    /// A dotted name with an empty or whitespace-containing segment.
    #[error("invalid name `{0}`")]
    InvalidPath(String),
    /// `{{/name}}` with no open section.
    #[error("unexpected close tag `{name}` with no open section")]
    UnexpectedClose { name: String },
    /// `{{/name}}` closing a section opened under a different name.
    #[error("mismatched close tag: expected `{expected}`, found `{found}`")]
    MismatchedClose { expected: String, found: String },
    /// End of input with a section still open.
    #[error("unclosed section `{name}`")]
    UnclosedSection { name: String },
    /// The source does not fit in 32-bit spans.
    #[error("template is too large ({0} bytes)")]
    SourceTooLarge(usize),
}

impl ParseErrorKind {
    /// Stable code for searchability, `E1xxx` like other parser errors.
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorKind::UnclosedTag { .. } => "E1001",
            ParseErrorKind::InvalidDelimiters(_) => "E1002",
            ParseErrorKind::EmptyName => "E1003",
            ParseErrorKind::InvalidPath(_) => "E1004",
            ParseErrorKind::UnexpectedClose { .. } => "E1005",
            ParseErrorKind::MismatchedClose { .. } => "E1006",
            ParseErrorKind::UnclosedSection { .. } => "E1007",
            ParseErrorKind::SourceTooLarge(_) => "E1008",
        }
    }
}

/// A template failed to compile. No partial template is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// 1-based line and column of the error within `source`.
    pub fn line_col(&self, source: &str) -> (u32, u32) {
        self.span.line_col(source)
    }
}

impl From<ScanError> for ParseError {
    fn from(err: ScanError) -> Self {
        let span = err.span();
        let kind = match err {
            ScanError::UnclosedTag { expected, .. } => ParseErrorKind::UnclosedTag { expected },
            ScanError::InvalidDelimiters { reason, .. } => {
                ParseErrorKind::InvalidDelimiters(reason)
            }
        };
        ParseError { kind, span }
    }
}

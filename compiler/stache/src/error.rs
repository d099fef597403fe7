//! The caller-facing error taxonomy.

use stache_parse::{ParseError, ParseErrorKind};
use stache_render::RenderError;
use thiserror::Error;

/// Any failure surfaced by [`Engine`](crate::Engine).
#[derive(Debug, Error)]
pub enum Error {
    /// Bad call-time input: an invalid [`Config`](crate::Config), an
    /// empty partial name, or a template too large to address.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The template text is not valid Mustache.
    #[error("parse error: {0}")]
    Parse(#[source] ParseError),

    /// Rendering stopped: a resolver failed, the sink failed, a lambda
    /// produced a bad template, or nesting ran too deep.
    #[error("render error: {0}")]
    Interpolation(#[source] RenderError),

    /// An output buffer could not be allocated.
    #[error("out of memory reserving {requested} bytes")]
    OutOfMemory { requested: usize },
}

impl Error {
    pub fn status(&self) -> Status {
        match self {
            Error::InvalidArgument(_) => Status::InvalidArgument,
            Error::Parse(_) => Status::ParseError,
            Error::Interpolation(_) => Status::InterpolationError,
            Error::OutOfMemory { .. } => Status::OutOfMemory,
        }
    }

    /// The resolver's own code, when a resolver caused the failure.
    pub fn resolver_code(&self) -> Option<u32> {
        match self {
            Error::Interpolation(err) => err.resolver_code(),
            _ => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err.kind {
            ParseErrorKind::SourceTooLarge(len) => {
                Error::InvalidArgument(format!("template of {len} bytes is too large"))
            }
            _ => Error::Parse(err),
        }
    }
}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::OutOfMemory { requested } => Error::OutOfMemory { requested },
            err => Error::Interpolation(err),
        }
    }
}

/// Stable numeric outcome codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Status {
    Success = 0,
    InvalidArgument = 1,
    ParseError = 2,
    InterpolationError = 3,
    OutOfMemory = 4,
}

impl Status {
    #[inline]
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Status of any engine result.
    pub fn of<T>(result: &Result<T, Error>) -> Status {
        match result {
            Ok(_) => Status::Success,
            Err(err) => err.status(),
        }
    }
}

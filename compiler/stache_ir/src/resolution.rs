//! Outcome vocabulary for path lookups.
//!
//! Every question the renderer asks a host resolver is answered with
//! exactly one [`Resolution`], or with a [`ResolveError`] when the host
//! itself failed. "Not found" is an ordinary answer, never an error.

use std::fmt;

/// The five ways a path lookup can come out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Resolution {
    /// The first segment is not known to this context; outer contexts may
    /// still know it.
    NotFoundInContext = 0,
    /// The first segment was found but a later segment could not be
    /// traversed. Stops the context-stack walk.
    ChainBroken = 1,
    /// No element at the requested iteration index. For index 0 this means
    /// the value is falsy or an empty collection.
    IteratorConsumed = 2,
    /// The value is computed by the host on demand.
    Lambda = 3,
    /// The value exists and can be interpolated or entered.
    Field = 4,
}

impl Resolution {
    /// Stable numeric code, matching the `repr(u8)` discriminant.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resolution::NotFoundInContext => "not found in context",
            Resolution::ChainBroken => "chain broken",
            Resolution::IteratorConsumed => "iterator consumed",
            Resolution::Lambda => "lambda",
            Resolution::Field => "field",
        })
    }
}

/// A host resolver failed while answering a lookup.
///
/// The code is opaque to the engine and is reported back to the caller
/// unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolveError {
    code: u32,
}

impl ResolveError {
    /// Returned by engine callbacks (lambda writes and re-renders) after
    /// the engine has recorded the real failure itself. Hosts should pass
    /// it straight back with `?`.
    pub const ABORTED: ResolveError = ResolveError::new(u32::MAX);

    #[inline]
    pub const fn new(code: u32) -> Self {
        ResolveError { code }
    }

    #[inline]
    pub const fn code(&self) -> u32 {
        self.code
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resolver error code {}", self.code)
    }
}

impl std::error::Error for ResolveError {}

/// Outcome of a resolver call that may fail.
pub type ResolveResult = Result<Resolution, ResolveError>;

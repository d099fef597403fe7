//! Source location spans.
//!
//! Compact 8-byte byte ranges into the template source. Literal text,
//! section bodies, and error locations are all expressed as spans so the
//! compiled tree never copies template text it can point at.

use std::fmt;

/// Byte range `start..end` into a template source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Empty span at offset zero.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a `usize` range, for slicing.
    #[inline]
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Slice `source` by this span.
    ///
    /// Returns an empty string if the span does not fall on valid
    /// boundaries of `source`; spans produced by the scanner always do.
    #[inline]
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.range()).unwrap_or_default()
    }

    /// 1-based line and column of `self.start` within `source`.
    ///
    /// Columns count bytes, matching how spans are measured.
    pub fn line_col(&self, source: &str) -> (u32, u32) {
        let upto = source.get(..self.start as usize).unwrap_or(source);
        let line = upto.bytes().filter(|&b| b == b'\n').count() + 1;
        let line_start = upto.rfind('\n').map_or(0, |i| i + 1);
        let column = upto.len() - line_start + 1;
        (
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(column).unwrap_or(u32::MAX),
        )
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

//! Byte cursor over template source.
//!
//! The cursor is [`Copy`], so the scanner can snapshot a position, probe
//! ahead, and discard the probe without bookkeeping. Positions are `u32`
//! byte offsets, matching [`Span`](stache_ir::Span).

use memchr::memmem::Finder;

#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// # Contract
    ///
    /// `src.len()` must fit in `u32`. The parser rejects larger sources
    /// before scanning starts.
    pub fn new(src: &'a str) -> Self {
        debug_assert!(
            u32::try_from(src.len()).is_ok(),
            "source length {} exceeds u32::MAX",
            src.len()
        );
        Cursor { src, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source length checked against u32::MAX at construction"
    )]
    pub fn source_len(&self) -> u32 {
        self.src.len() as u32
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len()
    }

    /// Unconsumed source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.src.get(self.pos as usize..).unwrap_or_default()
    }

    /// Byte at the cursor, or `0` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.src.as_bytes().get(self.pos as usize).copied().unwrap_or(0)
    }

    /// Advance by `n` bytes, clamped to the end of the source.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len());
    }

    /// Jump to the end of the source.
    #[inline]
    pub fn advance_to_end(&mut self) {
        self.pos = self.source_len();
    }

    /// Offset from the cursor to the next occurrence of `finder`'s needle.
    ///
    /// Uses memchr's SIMD substring search; the cursor does not move.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by the source length, which fits in u32"
    )]
    pub fn find(&self, finder: &Finder<'_>) -> Option<u32> {
        finder.find(self.rest().as_bytes()).map(|off| off as u32)
    }

    /// Source text between two offsets.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.src.get(start as usize..end as usize).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;

//! Lazy tag/literal scanner.
//!
//! Produces [`RawToken`]s one at a time. The only state carried between
//! tokens is the current delimiter pair (and substring finders built for
//! it), which a `{{=...=}}` tag replaces for everything after itself.
//!
//! After the first error the scanner is fused and yields `None`.

use memchr::memmem::Finder;
use stache_ir::{Delimiters, Span};

use crate::cursor::Cursor;
use crate::error::{DelimiterChangeError, ScanError};
use crate::tag::{RawTag, RawToken, Sigil};

/// Substring finders for one delimiter pair.
///
/// Rebuilt on every delimiter change; a template usually has none.
struct Finders {
    open: Finder<'static>,
    /// `}}` by default.
    close: Finder<'static>,
    /// `}` followed by the close delimiter, ending a triple mustache.
    triple_close: Finder<'static>,
    /// `=` followed by the close delimiter, ending a delimiter change.
    delims_close: Finder<'static>,
}

impl Finders {
    fn new(delimiters: &Delimiters) -> Self {
        let close = delimiters.close();
        Finders {
            open: Finder::new(delimiters.open()).into_owned(),
            close: Finder::new(close).into_owned(),
            triple_close: Finder::new(&format!("}}{close}")).into_owned(),
            delims_close: Finder::new(&format!("={close}")).into_owned(),
        }
    }
}

pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    delimiters: Delimiters,
    finders: Finders,
    failed: bool,
}

impl<'a> Scanner<'a> {
    /// Scan `source` starting with the default `{{ }}` delimiters.
    pub fn new(source: &'a str) -> Self {
        Self::with_delimiters(source, Delimiters::default())
    }

    /// Scan `source` starting with a custom delimiter pair.
    pub fn with_delimiters(source: &'a str, delimiters: Delimiters) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            finders: Finders::new(&delimiters),
            delimiters,
            failed: false,
        }
    }

    /// Delimiters in effect at the current position.
    ///
    /// Read right after a tag is returned, this is the pair that tag was
    /// written with, unless the tag itself was a delimiter change.
    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    fn text(&mut self, len: u32) -> RawToken {
        let start = self.cursor.pos();
        self.cursor.advance_n(len);
        RawToken::Text(Span::new(start, self.cursor.pos()))
    }

    fn tag(&mut self) -> Result<RawToken, ScanError> {
        let start = self.cursor.pos();
        self.cursor.advance_n(len_u32(self.delimiters.open()));

        let sigil = Sigil::from_byte(self.cursor.current());
        if sigil.is_explicit() {
            self.cursor.advance_n(1);
        }

        let (finder, closing) = match sigil {
            Sigil::Triple => (&self.finders.triple_close, format!("}}{}", self.delimiters.close())),
            Sigil::Delimiters => (&self.finders.delims_close, format!("={}", self.delimiters.close())),
            _ => (&self.finders.close, self.delimiters.close().to_owned()),
        };

        let Some(offset) = self.cursor.find(finder) else {
            self.cursor.advance_to_end();
            return Err(ScanError::UnclosedTag {
                span: Span::new(start, self.cursor.pos()),
                expected: closing,
            });
        };

        let content_start = self.cursor.pos();
        let content = trim_span(
            self.cursor.slice(content_start, content_start + offset),
            content_start,
        );
        self.cursor.advance_n(offset + len_u32(&closing));
        let span = Span::new(start, self.cursor.pos());

        if sigil == Sigil::Delimiters {
            let text = self.cursor.slice(content.start, content.end);
            let delimiters = parse_delimiter_change(text)
                .map_err(|reason| ScanError::InvalidDelimiters { span, reason })?;
            self.finders = Finders::new(&delimiters);
            self.delimiters = delimiters;
        }

        Ok(RawToken::Tag(RawTag {
            sigil,
            content,
            span,
        }))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<RawToken, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.is_eof() {
            return None;
        }
        let token = match self.cursor.find(&self.finders.open) {
            Some(0) => self.tag(),
            Some(offset) => Ok(self.text(offset)),
            None => {
                let remaining = self.cursor.source_len() - self.cursor.pos();
                Ok(self.text(remaining))
            }
        };
        self.failed = token.is_err();
        Some(token)
    }
}

/// Parse the inside of `{{=open close=}}` (already trimmed).
fn parse_delimiter_change(text: &str) -> Result<Delimiters, DelimiterChangeError> {
    let mut parts = text.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(open), Some(close), None) => Ok(Delimiters::new(open, close)?),
        _ => Err(DelimiterChangeError::Arity(text.split_whitespace().count())),
    }
}

/// Span of `text` (which starts at `offset`) with surrounding whitespace removed.
fn trim_span(text: &str, offset: u32) -> Span {
    let leading = text.len() - text.trim_start().len();
    let trimmed = text.trim();
    let start = offset + len_u32(&text[..leading]);
    Span::new(start, start + len_u32(trimmed))
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "every slice of the source fits in u32"
)]
#[inline]
fn len_u32(s: &str) -> u32 {
    s.len() as u32
}

#[cfg(test)]
mod tests;

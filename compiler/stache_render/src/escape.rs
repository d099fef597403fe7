//! HTML escaping for `{{name}}` tags.

use std::borrow::Cow;
use std::io;

/// How escaped tags treat interpolated text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Escape {
    /// Replace `& < > " '` with HTML entities.
    #[default]
    Html,
    /// Write everything verbatim; the host escapes (or doesn't) itself.
    None,
}

/// The smaller of two search hits.
///
/// memchr searches at most three needles at once; the five reserved
/// characters take two searches.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Offset of the next byte that needs an entity.
#[inline]
fn next_reserved(bytes: &[u8]) -> Option<usize> {
    earliest_of(
        memchr::memchr3(b'&', b'<', b'>', bytes),
        memchr::memchr2(b'"', b'\'', bytes),
    )
}

/// Entity for a reserved byte; `None` for anything else.
fn entity(byte: u8) -> Option<&'static str> {
    match byte {
        b'&' => Some("&amp;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'"' => Some("&quot;"),
        b'\'' => Some("&#39;"),
        _ => None,
    }
}

/// Write `text` to `out` with HTML-reserved characters replaced.
pub fn write_escaped_html(text: &str, out: &mut dyn io::Write) -> io::Result<()> {
    let bytes = text.as_bytes();
    let mut start = 0;
    while let Some(offset) = next_reserved(&bytes[start..]) {
        let at = start + offset;
        let Some(replacement) = entity(bytes[at]) else {
            break;
        };
        out.write_all(&bytes[start..at])?;
        out.write_all(replacement.as_bytes())?;
        start = at + 1;
    }
    out.write_all(&bytes[start..])
}

/// Escape `text` for HTML, borrowing when nothing needs replacing.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if next_reserved(text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    let mut rest = text;
    while let Some(offset) = next_reserved(rest.as_bytes()) {
        let Some(replacement) = entity(rest.as_bytes()[offset]) else {
            break;
        };
        escaped.push_str(&rest[..offset]);
        escaped.push_str(replacement);
        rest = &rest[offset + 1..];
    }
    escaped.push_str(rest);
    Cow::Owned(escaped)
}

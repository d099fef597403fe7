//! Raw token types produced by the scanner.

use stache_ir::Span;

/// The byte that follows an open delimiter and selects the tag kind.
///
/// Discriminants are the ASCII sigil characters; `Escaped` (no sigil) is 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Sigil {
    /// `{{name}}`
    Escaped = 0,
    /// `{{{name}}}`
    Triple = b'{',
    /// `{{&name}}`
    Ampersand = b'&',
    /// `{{#name}}`
    Section = b'#',
    /// `{{^name}}`
    Inverted = b'^',
    /// `{{/name}}`
    Close = b'/',
    /// `{{! text }}`
    Comment = b'!',
    /// `{{>name}}`
    Partial = b'>',
    /// `{{=<% %>=}}`
    Delimiters = b'=',
}

impl Sigil {
    /// Classify the byte after an open delimiter.
    ///
    /// Any byte that is not a sigil starts an escaped variable name and is
    /// not consumed.
    pub fn from_byte(byte: u8) -> Sigil {
        match byte {
            b'{' => Sigil::Triple,
            b'&' => Sigil::Ampersand,
            b'#' => Sigil::Section,
            b'^' => Sigil::Inverted,
            b'/' => Sigil::Close,
            b'!' => Sigil::Comment,
            b'>' => Sigil::Partial,
            b'=' => Sigil::Delimiters,
            _ => Sigil::Escaped,
        }
    }

    /// Whether this sigil occupies a byte of the tag.
    #[inline]
    pub fn is_explicit(self) -> bool {
        self != Sigil::Escaped
    }
}

/// A tag with its delimiters and sigil stripped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawTag {
    pub sigil: Sigil,
    /// Tag content with surrounding whitespace trimmed.
    pub content: Span,
    /// The whole tag, delimiters included.
    pub span: Span,
}

/// One step of the scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RawToken {
    /// A run of literal text, never empty.
    Text(Span),
    Tag(RawTag),
}

impl RawToken {
    /// Source span covered by this token.
    pub fn span(&self) -> Span {
        match self {
            RawToken::Text(span) => *span,
            RawToken::Tag(tag) => tag.span,
        }
    }
}

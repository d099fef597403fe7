//! Tag classification.
//!
//! Turns a [`RawTag`] (sigil plus trimmed content) into a typed [`Tag`],
//! compiling dotted names into [`Path`]s on the way.

use stache_ir::Path;
use stache_scan::{RawTag, Sigil};

use crate::error::{ParseError, ParseErrorKind};

/// A classified tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tag {
    Variable { path: Path, escape: bool },
    SectionOpen { path: Path, inverted: bool },
    SectionClose { path: Path },
    Comment,
    Partial { name: Box<str> },
    SetDelimiters,
}

impl Tag {
    /// Tags that vanish together with their line when they stand alone on it.
    pub fn can_stand_alone(&self) -> bool {
        !matches!(self, Tag::Variable { .. })
    }
}

/// Classify `raw` against the template `source` it was scanned from.
pub fn classify(raw: &RawTag, source: &str) -> Result<Tag, ParseError> {
    let content = raw.content.slice(source);
    let path = || parse_path(content).map_err(|kind| ParseError::new(kind, raw.span));

    Ok(match raw.sigil {
        Sigil::Escaped => Tag::Variable {
            path: path()?,
            escape: true,
        },
        Sigil::Triple | Sigil::Ampersand => Tag::Variable {
            path: path()?,
            escape: false,
        },
        Sigil::Section => Tag::SectionOpen {
            path: path()?,
            inverted: false,
        },
        Sigil::Inverted => Tag::SectionOpen {
            path: path()?,
            inverted: true,
        },
        Sigil::Close => Tag::SectionClose { path: path()? },
        Sigil::Comment => Tag::Comment,
        Sigil::Partial => {
            if content.is_empty() {
                return Err(ParseError::new(ParseErrorKind::EmptyName, raw.span));
            }
            Tag::Partial {
                name: content.into(),
            }
        }
        // The scanner already validated and applied the new pair.
        Sigil::Delimiters => Tag::SetDelimiters,
    })
}

/// Compile a dotted name. `.` alone is the implicit iterator.
pub fn parse_path(text: &str) -> Result<Path, ParseErrorKind> {
    if text.is_empty() {
        return Err(ParseErrorKind::EmptyName);
    }
    if text == "." {
        return Ok(Path::implicit());
    }
    let valid = text
        .split('.')
        .all(|segment| !segment.is_empty() && !segment.contains(char::is_whitespace));
    if !valid {
        return Err(ParseErrorKind::InvalidPath(text.to_owned()));
    }
    Ok(Path::from_segments(text.split('.')))
}

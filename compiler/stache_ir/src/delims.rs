//! Tag delimiter pairs.

use std::fmt;

/// Why a delimiter pair was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterError {
    /// The open or close token is empty.
    Empty,
    /// A token contains whitespace, which would make `{{=a b=}}` ambiguous.
    Whitespace(String),
    /// A token contains `=`, which terminates a delimiter-change tag.
    Equals(String),
}

impl fmt::Display for DelimiterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelimiterError::Empty => write!(f, "delimiters must not be empty"),
            DelimiterError::Whitespace(d) => write!(f, "delimiter {d:?} contains whitespace"),
            DelimiterError::Equals(d) => write!(f, "delimiter {d:?} contains '='"),
        }
    }
}

impl std::error::Error for DelimiterError {}

/// The open/close token pair that marks tags, `{{` and `}}` by default.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Delimiters {
    open: Box<str>,
    close: Box<str>,
}

impl Delimiters {
    pub const DEFAULT_OPEN: &'static str = "{{";
    pub const DEFAULT_CLOSE: &'static str = "}}";

    /// Create a validated delimiter pair.
    pub fn new(open: &str, close: &str) -> Result<Self, DelimiterError> {
        for token in [open, close] {
            if token.is_empty() {
                return Err(DelimiterError::Empty);
            }
            if token.chars().any(char::is_whitespace) {
                return Err(DelimiterError::Whitespace(token.to_owned()));
            }
            if token.contains('=') {
                return Err(DelimiterError::Equals(token.to_owned()));
            }
        }
        Ok(Delimiters {
            open: open.into(),
            close: close.into(),
        })
    }

    #[inline]
    pub fn open(&self) -> &str {
        &self.open
    }

    #[inline]
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Whether this is the standard `{{ }}` pair.
    pub fn is_default(&self) -> bool {
        &*self.open == Self::DEFAULT_OPEN && &*self.close == Self::DEFAULT_CLOSE
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters {
            open: Self::DEFAULT_OPEN.into(),
            close: Self::DEFAULT_CLOSE.into(),
        }
    }
}

impl fmt::Debug for Delimiters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Delimiters({} {})", self.open, self.close)
    }
}

//! Delimiter scanner for Mustache templates.
//!
//! Splits template source into alternating literal runs and raw tags,
//! following `{{=<% %>=}}` delimiter changes as it goes. The scanner knows
//! nothing about sections or paths; it only finds tag boundaries and the
//! sigil byte that follows the open delimiter.
//!
//! ```text
//! "Hi {{#a}}x{{/a}}" -> Text("Hi ") Tag(#, "a") Text("x") Tag(/, "a")
//! ```

mod cursor;
mod error;
mod scanner;
mod tag;

pub use cursor::Cursor;
pub use error::{DelimiterChangeError, ScanError};
pub use scanner::Scanner;
pub use tag::{RawTag, RawToken, Sigil};

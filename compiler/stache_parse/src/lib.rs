//! Mustache template compiler.
//!
//! Runs the three parse stages in a single pass over the source:
//!
//! 1. [`stache_scan::Scanner`] splits text and tags, tracking delimiters.
//! 2. [`classify`] types each tag and compiles its name into a path.
//! 3. The tree builder matches sections and lays nodes out in an arena.
//!
//! The first error aborts the compile; no partial [`Template`] escapes.

mod builder;
mod classify;
mod error;
mod standalone;

pub use classify::{classify, parse_path, Tag};
pub use error::{ParseError, ParseErrorKind};

use stache_ir::{Delimiters, Span, Template};
use stache_scan::{RawToken, Scanner};
use tracing::{debug, trace};

use builder::TreeBuilder;

/// Options for compiling a template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Delimiters in effect at the start of the template.
    pub delimiters: Delimiters,
}

/// Compile `source` with the default `{{ }}` delimiters.
pub fn parse(source: &str) -> Result<Template, ParseError> {
    parse_with(source, &ParseOptions::default())
}

/// Compile `source` with explicit options.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_with(source: &str, options: &ParseOptions) -> Result<Template, ParseError> {
    if u32::try_from(source.len()).is_err() {
        return Err(ParseError::new(
            ParseErrorKind::SourceTooLarge(source.len()),
            Span::DUMMY,
        ));
    }

    let mut scanner = Scanner::with_delimiters(source, options.delimiters.clone());
    let mut builder = TreeBuilder::new(source);

    while let Some(token) = scanner.next() {
        match token? {
            RawToken::Text(span) => builder.text(span),
            RawToken::Tag(raw) => {
                let tag = classify(&raw, source)?;
                trace!(?tag, span = ?raw.span, "tag");
                builder.tag(tag, raw.span, scanner.delimiters())?;
            }
        }
    }

    let template = builder.finish()?;
    debug!(nodes = template.node_count(), "compiled template");
    Ok(template)
}

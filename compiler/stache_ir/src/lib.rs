//! Compiled template representation for stache.
//!
//! Everything the parser produces and the renderer consumes lives here:
//! source spans, delimiter pairs, dotted paths, the flat node arena, and
//! the five-way [`Resolution`] vocabulary shared with host resolvers.
//!
//! A [`Template`] is immutable once built and holds no host data, so one
//! compiled template can be rendered from many threads at once.

mod delims;
mod node;
mod path;
mod resolution;
mod span;
mod template;

pub use delims::{DelimiterError, Delimiters};
pub use node::{Node, NodeArena, NodeRange, Partial, Section, Variable};
pub use path::{Path, PathRef};
pub use resolution::{Resolution, ResolveError, ResolveResult};
pub use span::Span;
pub use template::Template;

//! Mustache renderer.
//!
//! Renders a compiled [`Template`] against host data it cannot see. All
//! data access goes through the [`Resolver`] protocol: the renderer keeps
//! a stack of resolver contexts, asks them about dotted paths, and lets
//! them write values into an [`Interpolation`] writer or expand lambdas
//! through a [`LambdaContext`].
//!
//! ```text
//! Template ──► Renderer ──get/interpolate──► Resolver (host)
//!                 │
//!                 └──► Output (indent, escape) ──► io::Write sink
//! ```
//!
//! Rendering never mutates the template. Any number of renders of one
//! template may run at once, each with its own resolvers and sink.

mod capacity;
mod error;
mod escape;
mod lambda;
mod output;
mod partials;
mod renderer;
mod resolver;
mod scope;
mod stack;

#[cfg(test)]
mod test_helpers;

use std::io;

pub use error::RenderError;
pub use escape::{escape_html, write_escaped_html, Escape};
pub use lambda::LambdaContext;
pub use output::Interpolation;
pub use partials::{NoPartials, Partials};
pub use renderer::{RenderOptions, Renderer};
pub use resolver::{Empty, Lookup, Resolver};

pub use stache_ir::{PathRef, Resolution, ResolveError, ResolveResult, Template};

/// Render with default options and no partials.
pub fn render(
    template: &Template,
    root: &dyn Resolver,
    sink: &mut dyn io::Write,
) -> Result<(), RenderError> {
    Renderer::default().render(template, root, sink)
}

/// Render to a `String` with default options and no partials.
pub fn render_to_string(template: &Template, root: &dyn Resolver) -> Result<String, RenderError> {
    Renderer::default().render_to_string(template, root)
}

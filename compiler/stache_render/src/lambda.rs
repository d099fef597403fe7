//! Host access during lambda expansion.

use stache_ir::{Delimiters, ResolveError};
use stache_parse::{parse_with, ParseOptions};
use tracing::trace;

use crate::error::RenderError;
use crate::output::Output;
use crate::renderer::Renderer;
use crate::scope::Scope;

/// Which tag invoked the lambda.
pub(crate) enum LambdaKind<'a> {
    Section {
        inner: &'a str,
        delimiters: &'a Delimiters,
    },
    Variable {
        escape: bool,
    },
}

/// Handed to [`Resolver::expand_lambda`](crate::Resolver::expand_lambda).
///
/// For a section the lambda sees the unrendered body via
/// [`inner_text`](LambdaContext::inner_text) and decides what to emit. A
/// variable lambda has no body; whatever it emits is escaped according
/// to the tag, just like an ordinary value.
///
/// Both [`write_str`](LambdaContext::write_str) and
/// [`render`](LambdaContext::render) return [`ResolveError::ABORTED`] on
/// failure. The engine keeps the real error and reports it once the
/// lambda returns.
pub struct LambdaContext<'a, 'w> {
    renderer: &'a Renderer<'a>,
    scope: &'a Scope<'a>,
    out: &'a mut Output<'w>,
    kind: LambdaKind<'a>,
    depth: usize,
    failure: Option<RenderError>,
}

impl<'a, 'w> LambdaContext<'a, 'w> {
    pub(crate) fn new(
        renderer: &'a Renderer<'a>,
        scope: &'a Scope<'a>,
        out: &'a mut Output<'w>,
        kind: LambdaKind<'a>,
        depth: usize,
    ) -> Self {
        LambdaContext {
            renderer,
            scope,
            out,
            kind,
            depth,
            failure: None,
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self.kind, LambdaKind::Section { .. })
    }

    /// The raw section body. Empty for variable lambdas.
    pub fn inner_text(&self) -> &str {
        match self.kind {
            LambdaKind::Section { inner, .. } => inner,
            LambdaKind::Variable { .. } => "",
        }
    }

    /// Emit `text` without treating it as a template.
    pub fn write_str(&mut self, text: &str) -> Result<(), ResolveError> {
        let escape = self.escapes();
        let result = self.out.write_data(text, escape);
        self.check(result.map_err(RenderError::from))
    }

    /// Compile `text` and render it against the current context stack.
    ///
    /// Sections compile with the delimiters in effect at the section tag;
    /// variables compile with the defaults.
    pub fn render(&mut self, text: &str) -> Result<(), ResolveError> {
        let result = self.render_inner(text);
        self.check(result)
    }

    pub(crate) fn into_failure(self) -> Option<RenderError> {
        self.failure
    }

    fn escapes(&self) -> bool {
        match self.kind {
            LambdaKind::Section { .. } => false,
            LambdaKind::Variable { escape } => escape,
        }
    }

    fn render_inner(&mut self, text: &str) -> Result<(), RenderError> {
        let depth = self.depth + 1;
        self.renderer.check_depth(depth, "<lambda>")?;

        let options = ParseOptions {
            delimiters: match self.kind {
                LambdaKind::Section { delimiters, .. } => delimiters.clone(),
                LambdaKind::Variable { .. } => Delimiters::default(),
            },
        };
        let template = parse_with(text, &options)?;
        trace!(nodes = template.node_count(), depth, "lambda template");

        if !self.escapes() {
            return self
                .renderer
                .render_nodes(&template, template.root(), self.scope, self.out, depth);
        }

        // Escaped variable lambdas escape the rendered result, so render
        // into a scratch buffer first.
        let mut scratch = Vec::new();
        let mut scratch_out = Output::new(&mut scratch);
        self.renderer
            .render_nodes(&template, template.root(), self.scope, &mut scratch_out, depth)?;
        let rendered = String::from_utf8_lossy(&scratch);
        self.out.write_data(&rendered, true)?;
        Ok(())
    }

    fn check(&mut self, result: Result<(), RenderError>) -> Result<(), ResolveError> {
        match result {
            Ok(()) => Ok(()),
            Err(err) => {
                if self.failure.is_none() {
                    self.failure = Some(err);
                }
                Err(ResolveError::ABORTED)
            }
        }
    }
}

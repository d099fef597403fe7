//! Tree-walking renderer.
//!
//! Walks a compiled [`Template`] node by node, answering every name from
//! the context stack and streaming output to the sink as it goes. Nothing
//! is buffered except the scratch output of escaped variable lambdas.

use std::io;

use stache_ir::{Node, NodeRange, Partial, Path, Resolution, Section, Template, Variable};
use tracing::{debug, trace};

use crate::capacity::estimate;
use crate::error::RenderError;
use crate::escape::Escape;
use crate::lambda::{LambdaContext, LambdaKind};
use crate::output::{Interpolation, Output};
use crate::partials::Partials;
use crate::resolver::{Lookup, Resolver};
use crate::scope::Scope;
use crate::stack::ensure_sufficient_stack;

/// Render-time options.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escaping applied to `{{name}}` tags.
    pub escape: Escape,
    /// Pre-size `render_to_string` buffers from resolver hints.
    pub capacity_hints: bool,
    /// Maximum nesting of partials and lambda re-renders.
    pub max_depth: usize,
}

impl RenderOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 64;
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            escape: Escape::Html,
            capacity_hints: true,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Renders templates with fixed options and an optional partial source.
///
/// A `Renderer` holds no per-render state and can be shared between
/// threads whenever its partial source can.
#[derive(Copy, Clone)]
pub struct Renderer<'r> {
    options: RenderOptions,
    partials: Option<&'r (dyn Partials + Sync)>,
}

impl<'r> Renderer<'r> {
    pub fn new(options: RenderOptions) -> Self {
        Renderer {
            options,
            partials: None,
        }
    }

    #[must_use]
    pub fn with_partials(mut self, partials: &'r (dyn Partials + Sync)) -> Self {
        self.partials = Some(partials);
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `template` against `root`, streaming into `sink`.
    ///
    /// The sink is flushed on success. On failure, whatever was written
    /// before the failure stays written.
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = template.node_count()))]
    pub fn render(
        &self,
        template: &Template,
        root: &dyn Resolver,
        sink: &mut dyn io::Write,
    ) -> Result<(), RenderError> {
        let scope = Scope::root(root);
        let mut out = Output::new(sink);
        let result = self.render_nodes(template, template.root(), &scope, &mut out, 0);
        match &result {
            Ok(()) => debug!(bytes = out.written(), "render complete"),
            Err(err) => debug!(bytes = out.written(), %err, "render failed"),
        }
        result?;
        out.flush()?;
        Ok(())
    }

    /// Render into a fresh `String`.
    ///
    /// With capacity hints on, the buffer is reserved up front from the
    /// template's literal text and the root frame's hints. The reservation
    /// is capped, so an inflated hint costs at most that much memory;
    /// failing to allocate even the capped amount is reported as
    /// [`RenderError::OutOfMemory`].
    pub fn render_to_string(
        &self,
        template: &Template,
        root: &dyn Resolver,
    ) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        if self.options.capacity_hints {
            let requested = estimate(template, root);
            buf.try_reserve(requested)
                .map_err(|_| RenderError::OutOfMemory { requested })?;
            trace!(requested, "reserved output buffer");
        }
        self.render(template, root, &mut buf)?;
        String::from_utf8(buf)
            .map_err(|err| RenderError::Write(io::Error::new(io::ErrorKind::InvalidData, err)))
    }

    pub(crate) fn check_depth(&self, depth: usize, name: &str) -> Result<(), RenderError> {
        if depth > self.options.max_depth {
            return Err(RenderError::RecursionLimit {
                limit: self.options.max_depth,
                name: name.to_owned(),
            });
        }
        Ok(())
    }

    pub(crate) fn render_nodes(
        &self,
        template: &Template,
        range: NodeRange,
        scope: &Scope<'_>,
        out: &mut Output<'_>,
        depth: usize,
    ) -> Result<(), RenderError> {
        ensure_sufficient_stack(|| {
            for node in template.nodes(range) {
                match node {
                    Node::Text(span) => out.write_text(template.text(*span))?,
                    Node::Variable(variable) => self.variable(variable, scope, out, depth)?,
                    Node::Section(section) if section.inverted => {
                        self.inverted(template, section, scope, out, depth)?;
                    }
                    Node::Section(section) => self.section(template, section, scope, out, depth)?,
                    Node::Partial(partial) => self.partial(partial, scope, out, depth)?,
                }
            }
            Ok(())
        })
    }

    fn variable(
        &self,
        variable: &Variable,
        scope: &Scope<'_>,
        out: &mut Output<'_>,
        depth: usize,
    ) -> Result<(), RenderError> {
        let path = variable.path.to_ref();
        let escape = variable.escape && self.options.escape == Escape::Html;

        for frame in scope.frames() {
            let mut interpolation = Interpolation::new(out, escape);
            let result = frame.interpolate(path, &mut interpolation);
            if let Some(failure) = interpolation.into_failure() {
                return Err(RenderError::Write(failure));
            }
            let resolution =
                result.map_err(|err| RenderError::interpolation(&variable.path, err))?;
            trace!(path = %variable.path, %resolution, "variable");
            match resolution {
                Resolution::NotFoundInContext => continue,
                Resolution::Lambda => {
                    let kind = LambdaKind::Variable { escape };
                    return self.lambda(frame, &variable.path, kind, scope, out, depth);
                }
                Resolution::ChainBroken | Resolution::IteratorConsumed | Resolution::Field => {
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    fn section(
        &self,
        template: &Template,
        section: &Section,
        scope: &Scope<'_>,
        out: &mut Output<'_>,
        depth: usize,
    ) -> Result<(), RenderError> {
        let Some((frame, first)) = find(scope, &section.path)? else {
            return Ok(());
        };
        trace!(path = %section.path, resolution = %first.resolution(), "section");

        match first {
            Lookup::Field(context) => {
                self.render_body(template, section.body, scope, &*context, out, depth)?;
            }
            Lookup::Lambda => {
                let kind = LambdaKind::Section {
                    inner: template.text(section.inner),
                    delimiters: &section.delimiters,
                };
                return self.lambda(frame, &section.path, kind, scope, out, depth);
            }
            Lookup::NotFoundInContext | Lookup::ChainBroken | Lookup::IteratorConsumed => {
                return Ok(());
            }
        }

        for index in 1.. {
            let lookup = frame
                .get(section.path.at(index))
                .map_err(|err| RenderError::interpolation(section.path.at(index), err))?;
            let Lookup::Field(context) = lookup else {
                trace!(path = %section.path, iterations = index, "section done");
                break;
            };
            self.render_body(template, section.body, scope, &*context, out, depth)?;
        }
        Ok(())
    }

    fn render_body(
        &self,
        template: &Template,
        body: NodeRange,
        scope: &Scope<'_>,
        context: &dyn Resolver,
        out: &mut Output<'_>,
        depth: usize,
    ) -> Result<(), RenderError> {
        let child = scope.push(context);
        self.render_nodes(template, body, &child, out, depth)
    }

    fn inverted(
        &self,
        template: &Template,
        section: &Section,
        scope: &Scope<'_>,
        out: &mut Output<'_>,
        depth: usize,
    ) -> Result<(), RenderError> {
        let empty = match find(scope, &section.path)? {
            None => true,
            Some((_, lookup)) => !matches!(lookup, Lookup::Field(_) | Lookup::Lambda),
        };
        trace!(path = %section.path, empty, "inverted section");
        if empty {
            self.render_nodes(template, section.body, scope, out, depth)?;
        }
        Ok(())
    }

    fn partial(
        &self,
        partial: &Partial,
        scope: &Scope<'_>,
        out: &mut Output<'_>,
        depth: usize,
    ) -> Result<(), RenderError> {
        let Some(template) = self.partials.and_then(|p| p.get_partial(&partial.name)) else {
            trace!(name = &*partial.name, "partial not found");
            return Ok(());
        };
        let depth = depth + 1;
        self.check_depth(depth, &partial.name)?;
        trace!(name = &*partial.name, depth, "partial");

        let mark = out.push_indent(&partial.indent);
        let result = self.render_nodes(template, template.root(), scope, out, depth);
        out.pop_indent(mark);
        result
    }

    fn lambda(
        &self,
        frame: &dyn Resolver,
        path: &Path,
        kind: LambdaKind<'_>,
        scope: &Scope<'_>,
        out: &mut Output<'_>,
        depth: usize,
    ) -> Result<(), RenderError> {
        let mut context = LambdaContext::new(self, scope, out, kind, depth);
        let result = frame.expand_lambda(path.to_ref(), &mut context);
        if let Some(failure) = context.into_failure() {
            return Err(failure);
        }
        let resolution = result.map_err(|err| RenderError::interpolation(path, err))?;
        trace!(%path, %resolution, "lambda expanded");
        Ok(())
    }
}

impl Default for Renderer<'_> {
    fn default() -> Self {
        Renderer::new(RenderOptions::default())
    }
}

/// Walk the stack for the frame that owns `path`, asking at index 0.
fn find<'s>(
    scope: &'s Scope<'_>,
    path: &Path,
) -> Result<Option<(&'s dyn Resolver, Lookup<'s>)>, RenderError> {
    for frame in scope.frames() {
        let lookup = frame
            .get(path.at(0))
            .map_err(|err| RenderError::interpolation(path, err))?;
        if !matches!(lookup, Lookup::NotFoundInContext) {
            return Ok(Some((frame, lookup)));
        }
    }
    Ok(None)
}

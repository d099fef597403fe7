//! Tree builder.
//!
//! Consumes text runs and classified tags in document order and assembles
//! the node arena with a stack of open sections. A section's body is
//! allocated into the arena only when its close tag arrives, so every body
//! is a contiguous [`NodeRange`](stache_ir::NodeRange).

use stache_ir::{Delimiters, Node, NodeArena, Partial, Path, Section, Span, Template, Variable};
use tracing::trace;

use crate::classify::Tag;
use crate::error::{ParseError, ParseErrorKind};
use crate::standalone::standalone_line;

/// A section whose close tag has not been seen yet.
struct OpenSection {
    path: Path,
    inverted: bool,
    /// Span of the open tag.
    span: Span,
    delimiters: Delimiters,
    body: Vec<Node>,
}

pub(crate) struct TreeBuilder<'s> {
    source: &'s str,
    arena: NodeArena,
    root: Vec<Node>,
    open: Vec<OpenSection>,
    /// Text before this offset belongs to a removed standalone line.
    skip_until: u32,
}

impl<'s> TreeBuilder<'s> {
    pub(crate) fn new(source: &'s str) -> Self {
        TreeBuilder {
            source,
            arena: NodeArena::new(),
            root: Vec::new(),
            open: Vec::new(),
            skip_until: 0,
        }
    }

    /// Nodes of the innermost open section, or the root.
    fn current(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(section) => &mut section.body,
            None => &mut self.root,
        }
    }

    pub(crate) fn text(&mut self, span: Span) {
        let start = span.start.max(self.skip_until);
        if start < span.end {
            self.current().push(Node::Text(Span::new(start, span.end)));
        }
    }

    /// Add a classified tag found at `span`.
    ///
    /// `delimiters` is the pair in effect at the tag, recorded on sections
    /// so lambdas can re-render their bodies with it.
    pub(crate) fn tag(
        &mut self,
        tag: Tag,
        span: Span,
        delimiters: &Delimiters,
    ) -> Result<(), ParseError> {
        let line = if tag.can_stand_alone() {
            standalone_line(self.source, span)
        } else {
            None
        };
        if let Some(line) = line {
            trace!(?span, "standalone tag");
            self.trim_indent(line.indent);
            self.skip_until = line.line_end;
        }

        match tag {
            Tag::Variable { path, escape } => {
                self.current()
                    .push(Node::Variable(Variable { path, escape, span }));
            }
            Tag::SectionOpen { path, inverted } => self.open.push(OpenSection {
                path,
                inverted,
                span,
                delimiters: delimiters.clone(),
                body: Vec::new(),
            }),
            Tag::SectionClose { path } => self.close(path, span)?,
            Tag::Partial { name } => {
                let indent = line.map_or("", |line| line.indent.slice(self.source));
                let indent: Box<str> = indent.into();
                self.current()
                    .push(Node::Partial(Partial { name, indent, span }));
            }
            Tag::Comment | Tag::SetDelimiters => {}
        }
        Ok(())
    }

    /// Drop the indentation of a standalone tag from the preceding text.
    fn trim_indent(&mut self, indent: Span) {
        if indent.is_empty() {
            return;
        }
        let nodes = self.current();
        if let Some(Node::Text(text)) = nodes.last_mut() {
            if text.end == indent.end {
                text.end = indent.start.max(text.start);
                if text.is_empty() {
                    nodes.pop();
                }
            }
        }
    }

    fn close(&mut self, path: Path, span: Span) -> Result<(), ParseError> {
        let Some(section) = self.open.pop() else {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedClose {
                    name: path.to_string(),
                },
                span,
            ));
        };
        if section.path != path {
            return Err(ParseError::new(
                ParseErrorKind::MismatchedClose {
                    expected: section.path.to_string(),
                    found: path.to_string(),
                },
                span,
            ));
        }

        let body = self.arena.alloc_range(section.body);
        let node = Node::Section(Section {
            path: section.path,
            inverted: section.inverted,
            body,
            inner: Span::new(section.span.end, span.start),
            delimiters: section.delimiters,
            span: section.span,
        });
        self.current().push(node);
        Ok(())
    }

    /// Finish the tree. Fails if any section is still open.
    pub(crate) fn finish(mut self) -> Result<Template, ParseError> {
        if let Some(section) = self.open.pop() {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedSection {
                    name: section.path.to_string(),
                },
                section.span,
            ));
        }
        let root = self.arena.alloc_range(self.root);
        Ok(Template::new(self.source.into(), self.arena, root))
    }
}

//! The compiled, immutable template.

use rustc_hash::FxHashSet;

use crate::{Node, NodeArena, NodeRange, Span};

/// A parsed template: the source text plus the node tree built over it.
///
/// Nothing in a `Template` changes after construction and it holds no host
/// data, so it can be shared by reference (or `Arc`) across concurrent
/// renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    source: Box<str>,
    arena: NodeArena,
    root: NodeRange,
}

// Shared across render threads; keep it that way.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Template>();
};

impl Template {
    /// Assemble a template from parser output.
    ///
    /// `root` must be a range allocated in `arena`, and every span in the
    /// arena must index into `source`.
    pub fn new(source: Box<str>, arena: NodeArena, root: NodeRange) -> Self {
        Template {
            source,
            arena,
            root,
        }
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Range of the top-level nodes.
    #[inline]
    pub fn root(&self) -> NodeRange {
        self.root
    }

    #[inline]
    pub fn root_nodes(&self) -> &[Node] {
        self.arena.get(self.root)
    }

    /// Nodes of a section body (or the root range).
    #[inline]
    pub fn nodes(&self, range: NodeRange) -> &[Node] {
        self.arena.get(range)
    }

    /// Source text covered by `span`.
    #[inline]
    pub fn text(&self, span: Span) -> &str {
        span.slice(&self.source)
    }

    /// Total number of nodes at every nesting level.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Distinct partial names referenced anywhere in the template, in
    /// first-seen arena order.
    pub fn partial_names(&self) -> impl Iterator<Item = &str> + '_ {
        let mut seen = FxHashSet::default();
        self.arena.iter().filter_map(move |node| match node {
            Node::Partial(partial) if seen.insert(&*partial.name) => Some(&*partial.name),
            _ => None,
        })
    }
}

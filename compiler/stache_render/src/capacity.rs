//! Output size estimation for buffer pre-sizing.

use stache_ir::{Node, NodeRange, Resolution, Template};

use crate::resolver::Resolver;

/// Upper bound on an up-front reservation. Output past this grows the
/// buffer as it is written.
pub(crate) const MAX_RESERVE: usize = 16 * 1024 * 1024;

/// Literal text plus the root frame's hints for variables outside
/// sections. Section bodies count their literal text once; partials and
/// lambdas count nothing.
///
/// Hints come from the host and are not trusted: the sum saturates and is
/// capped at [`MAX_RESERVE`].
pub(crate) fn estimate(template: &Template, root: &dyn Resolver) -> usize {
    walk(template, template.root(), Some(root)).min(MAX_RESERVE)
}

fn walk(template: &Template, range: NodeRange, root: Option<&dyn Resolver>) -> usize {
    template
        .nodes(range)
        .iter()
        .map(|node| match node {
            Node::Text(span) => span.len() as usize,
            Node::Variable(variable) => match root {
                Some(root) => match root.capacity_hint(variable.path.to_ref()) {
                    (Resolution::Field, size) => size,
                    _ => 0,
                },
                None => 0,
            },
            // Inside a section names may resolve against another frame.
            Node::Section(section) => walk(template, section.body, None),
            Node::Partial(_) => 0,
        })
        .fold(0, usize::saturating_add)
}

//! Standalone-line detection.
//!
//! A block, comment, partial, or delimiter tag that is the only thing on
//! its line (apart from spaces and tabs) removes that whole line from the
//! output: the indentation before it and the line ending after it.

use stache_ir::Span;

/// What to cut when a tag stands alone on its line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StandaloneLine {
    /// Whitespace between the start of the line and the tag.
    pub indent: Span,
    /// End of the removed region: just past the line ending, or the end of
    /// the source when the tag sits on the last line.
    pub line_end: u32,
}

/// Check whether the tag at `tag` is alone on its line in `source`.
pub fn standalone_line(source: &str, tag: Span) -> Option<StandaloneLine> {
    let before = source.get(..tag.start as usize)?;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    if !is_blank(&before[line_start..]) {
        return None;
    }

    let after = source.get(tag.end as usize..)?;
    let (rest_of_line, ending_len) = match after.find('\n') {
        Some(i) => (&after[..i], i + 1),
        None => (after, after.len()),
    };
    let rest_of_line = rest_of_line.strip_suffix('\r').unwrap_or(rest_of_line);
    if !is_blank(rest_of_line) {
        return None;
    }

    Some(StandaloneLine {
        indent: Span::new(to_u32(line_start), tag.start),
        line_end: tag.end + to_u32(ending_len),
    })
}

fn is_blank(text: &str) -> bool {
    text.bytes().all(|b| b == b' ' || b == b'\t')
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "offsets within a source whose length fits in u32"
)]
fn to_u32(n: usize) -> u32 {
    n as u32
}

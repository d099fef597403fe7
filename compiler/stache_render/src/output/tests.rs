#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use std::fmt::Write as _;

fn collect(f: impl FnOnce(&mut Output<'_>) -> io::Result<()>) -> String {
    let mut buf = Vec::new();
    let mut out = Output::new(&mut buf);
    f(&mut out).expect("vec sink");
    String::from_utf8(buf).expect("utf8")
}

/// Sink that accepts `limit` bytes and then fails.
struct Limited {
    limit: usize,
}

impl io::Write for Limited {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
        }
        self.limit -= buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_text_without_indent_passes_through() {
    assert_eq!(collect(|out| out.write_text("a\nb\n")), "a\nb\n");
}

#[test]
fn test_text_is_indented_at_line_starts() {
    let rendered = collect(|out| {
        let mark = out.push_indent("  ");
        out.write_text("one\ntwo\n")?;
        out.pop_indent(mark);
        out.write_text("three")
    });
    assert_eq!(rendered, "  one\n  two\nthree");
}

#[test]
fn test_data_is_not_reindented() {
    let rendered = collect(|out| {
        out.push_indent("> ");
        out.write_data("x\ny", false)?;
        out.write_text("\nz")
    });
    assert_eq!(rendered, "> x\ny\n> z");
}

#[test]
fn test_nested_indent_accumulates() {
    let rendered = collect(|out| {
        let outer = out.push_indent(" ");
        let inner = out.push_indent("\t");
        out.write_text("deep\n")?;
        out.pop_indent(inner);
        out.write_text("shallow\n")?;
        out.pop_indent(outer);
        Ok(())
    });
    assert_eq!(rendered, " \tdeep\n shallow\n");
}

#[test]
fn test_interpolation_escapes_per_tag() {
    let rendered = collect(|out| {
        let mut escaped = Interpolation::new(out, true);
        assert!(escaped.is_escaped());
        escaped.write_text("<b>")?;
        escaped.write_raw("<i>")?;
        write!(escaped, " {}&", 1).map_err(|_| io::Error::other("fmt"))?;
        Ok(())
    });
    assert_eq!(rendered, "&lt;b&gt;<i> 1&amp;");
}

#[test]
fn test_interpolation_remembers_first_failure() {
    let mut sink = Limited { limit: 2 };
    let mut out = Output::new(&mut sink);
    let mut interpolation = Interpolation::new(&mut out, false);
    assert!(interpolation.write_text("ok").is_ok());
    assert!(interpolation.write_text("overflow").is_err());
    assert!(interpolation.write_text("").is_err());
    let failure = interpolation.into_failure().expect("failure recorded");
    assert_eq!(failure.kind(), io::ErrorKind::WriteZero);
}

#[test]
fn test_written_counts_indent_and_unescaped_data() {
    let mut buf = Vec::new();
    let mut out = Output::new(&mut buf);
    let mark = out.push_indent("  ");
    out.write_text("a\n").expect("vec sink");
    out.write_data("<", true).expect("vec sink");
    out.pop_indent(mark);
    // "  a\n", then "  " and "<" before escaping.
    assert_eq!(out.written(), 7);
    assert_eq!(String::from_utf8(buf).expect("utf8"), "  a\n  &lt;");
}

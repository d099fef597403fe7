//! Output plumbing between the renderer, host resolvers, and the sink.
//!
//! [`Output`] owns the line-start bookkeeping that partial indentation
//! depends on. Template text is indented at every line start; data a
//! host writes is indented only where it begins a line, never inside.

use std::fmt;
use std::io;

use crate::escape::write_escaped_html;

pub(crate) struct Output<'w> {
    sink: &'w mut dyn io::Write,
    /// Accumulated indentation of the partials being rendered.
    indent: String,
    at_line_start: bool,
    written: usize,
}

impl<'w> Output<'w> {
    pub(crate) fn new(sink: &'w mut dyn io::Write) -> Self {
        Output {
            sink,
            indent: String::new(),
            at_line_start: true,
            written: 0,
        }
    }

    /// Literal template text.
    pub(crate) fn write_text(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        if self.indent.is_empty() {
            return self.emit(text);
        }
        for line in text.split_inclusive('\n') {
            if self.at_line_start {
                self.emit_indent()?;
            }
            self.emit(line)?;
        }
        Ok(())
    }

    /// Interpolated data, HTML-escaped when `escape` is set.
    pub(crate) fn write_data(&mut self, text: &str, escape: bool) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        if self.at_line_start && !self.indent.is_empty() {
            self.emit_indent()?;
        }
        if escape {
            write_escaped_html(text, &mut *self.sink)?;
            self.written += text.len();
            self.at_line_start = text.ends_with('\n');
            Ok(())
        } else {
            self.emit(text)
        }
    }

    /// Add a partial's indentation; returns the mark to restore.
    pub(crate) fn push_indent(&mut self, indent: &str) -> usize {
        let mark = self.indent.len();
        self.indent.push_str(indent);
        mark
    }

    pub(crate) fn pop_indent(&mut self, mark: usize) {
        self.indent.truncate(mark);
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    /// Bytes of template text, data, and indentation written so far.
    /// Escaped data counts its unescaped length.
    pub(crate) fn written(&self) -> usize {
        self.written
    }

    fn emit_indent(&mut self) -> io::Result<()> {
        self.sink.write_all(self.indent.as_bytes())?;
        self.written += self.indent.len();
        Ok(())
    }

    fn emit(&mut self, text: &str) -> io::Result<()> {
        self.sink.write_all(text.as_bytes())?;
        self.written += text.len();
        self.at_line_start = text.ends_with('\n');
        Ok(())
    }
}

/// Where a resolver writes an interpolated value.
///
/// [`write_text`](Interpolation::write_text) applies the tag's escaping;
/// [`write_raw`](Interpolation::write_raw) bypasses it. The first sink
/// failure is remembered and aborts the render once the resolver returns,
/// whatever the resolver itself answers.
pub struct Interpolation<'a, 'w> {
    out: &'a mut Output<'w>,
    escape: bool,
    failure: Option<io::Error>,
}

impl<'a, 'w> Interpolation<'a, 'w> {
    pub(crate) fn new(out: &'a mut Output<'w>, escape: bool) -> Self {
        Interpolation {
            out,
            escape,
            failure: None,
        }
    }

    /// `true` inside `{{name}}`, `false` inside `{{{name}}}` and
    /// `{{&name}}` or when escaping is turned off.
    pub fn is_escaped(&self) -> bool {
        self.escape
    }

    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        let escape = self.escape;
        self.write(text, escape)
    }

    pub fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.write(text, false)
    }

    pub(crate) fn into_failure(self) -> Option<io::Error> {
        self.failure
    }

    fn write(&mut self, text: &str, escape: bool) -> io::Result<()> {
        if let Some(failure) = &self.failure {
            return Err(io::Error::from(failure.kind()));
        }
        match self.out.write_data(text, escape) {
            Ok(()) => Ok(()),
            Err(err) => {
                let kind = err.kind();
                self.failure = Some(err);
                Err(io::Error::from(kind))
            }
        }
    }
}

impl fmt::Write for Interpolation<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_text(s).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests;

//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support and a
//! caret snippet under the offending input.

use std::io::Write;

use lispy_ir::Span;

use super::{ColorMode, DiagnosticEmitter};
use crate::{Diagnostic, Label};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` decides the outcome of `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// Print the source line a label points into, with carets under the span.
    fn write_snippet(&mut self, label: &Label, source: &str) {
        let Some((line_no, line, column)) = locate(source, label.span) else {
            let _ = writeln!(self.writer, "  --> {:?}: {}", label.span, label.message);
            return;
        };

        let gutter = " ".repeat(line_no.to_string().len());
        let width = source
            .get(label.span.to_range())
            .map_or(1, |text| text.chars().count().max(1));

        let _ = writeln!(self.writer, "{gutter}--> {line_no}:{}", column + 1);
        let _ = writeln!(self.writer, "{gutter} |");
        let _ = writeln!(self.writer, "{line_no} | {line}");
        let _ = write!(self.writer, "{gutter} | {}", " ".repeat(column));

        let marker = if label.is_primary { "^" } else { "-" }.repeat(width);
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        self.write_colored(&format!("{marker} {}", label.message), color);
        let _ = writeln!(self.writer);
    }
}

/// Find the 1-based line number, the line text and the 0-based character
/// column of `span.start` in `source`.
fn locate(source: &str, span: Span) -> Option<(usize, &str, usize)> {
    let start = span.start as usize;
    if start > source.len() {
        return None;
    }
    let before = source.get(..start)?;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[start..].find('\n').map_or(source.len(), |i| start + i);
    let line_no = before.matches('\n').count() + 1;
    let column = source.get(line_start..start)?.chars().count();
    Some((line_no, source.get(line_start..line_end)?, column))
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic, source: &str) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_snippet(label, source);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

//! One interpreter session and how its results reach the user.

use std::fs;
use std::ops::ControlFlow;
use std::path::Path;

use lispy_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use lispy_eval::{Halt, Interpreter, RunError, SharedPrintHandler, Value};
use lispy_ir::{Builtin, Function};
use lispy_parse::ParseError;
use tracing::debug;

use crate::CliError;

/// Printed when the session ends through `quit`.
pub const FAREWELL: &str = "Quitting! 👋";

/// Whether the session should keep reading input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interpreter plus the rules for printing what it produces.
///
/// All output, including rendered parse diagnostics, goes through the
/// interpreter's print handler.
pub struct Session {
    interp: Interpreter,
    color: ColorMode,
    is_tty: bool,
}

impl Session {
    pub fn new(print_handler: SharedPrintHandler, color: ColorMode, is_tty: bool) -> Self {
        Session {
            interp: Interpreter::with_print_handler(print_handler),
            color,
            is_tty,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interp
    }

    pub fn print_banner(&self) {
        let out = self.interp.print_handler();
        out.println(&format!("Lispy Version {}", crate::VERSION));
        out.println("Use 'quit' to exit");
        out.println("");
    }

    pub fn print_farewell(&self) {
        self.interp.print_handler().println(FAREWELL);
    }

    /// Evaluate one REPL line and echo its result.
    ///
    /// The whole line is one S-expression, so `+ 1 2` means `(+ 1 2)`.
    pub fn run_line(&self, line: &str) -> Flow {
        match self.interp.eval_line(line) {
            Ok(value) if is_quit(&value) => Flow::Quit,
            Ok(value) => {
                self.interp.print_handler().println(&value.to_string());
                Flow::Continue
            }
            Err(err) => self.report(&err, line),
        }
    }

    /// Evaluate every top-level expression of `source`.
    ///
    /// Results are not echoed; only `Error` values are printed. A `quit`
    /// form in either spelling ends the session at once, and nothing after
    /// it is evaluated.
    pub fn run_source(&self, source: &str) -> Flow {
        let out = self.interp.print_handler();
        let result = self.interp.eval_each(source, |value| {
            if is_quit(&value) {
                return ControlFlow::Break(());
            }
            if value.is_error() {
                out.println(&value.to_string());
            }
            ControlFlow::Continue(())
        });
        match result {
            Ok(ControlFlow::Break(())) => Flow::Quit,
            Ok(ControlFlow::Continue(())) => Flow::Continue,
            Err(err) => self.report(&err, source),
        }
    }

    /// Read `path` and run it with [`Session::run_source`].
    pub fn run_file(&self, path: &Path) -> Result<Flow, CliError> {
        debug!(path = %path.display(), "running file");
        let source = fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.run_source(&source))
    }

    fn report(&self, err: &RunError, source: &str) -> Flow {
        match err {
            RunError::Halt(Halt::Quit) => Flow::Quit,
            RunError::Parse(err) => {
                self.interp.print_handler().print(&self.render(err, source));
                Flow::Continue
            }
        }
    }

    /// Render a parse error as a terminal diagnostic.
    pub fn render(&self, err: &ParseError, source: &str) -> String {
        let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), self.color, self.is_tty);
        emitter.emit(&err.to_diagnostic(), source);
        emitter.flush();
        String::from_utf8_lossy(&emitter.into_inner()).into_owned()
    }
}

/// `quit` typed on its own evaluates to the builtin rather than calling it.
fn is_quit(value: &Value) -> bool {
    matches!(value, Value::Function(Function::Builtin(Builtin::Quit)))
}

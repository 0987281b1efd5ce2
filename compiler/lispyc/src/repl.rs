//! The interactive read-eval-print loop.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use crate::{CliError, Flow, ReplConfig, Session};

/// Source of input lines for the loop.
pub trait LineReader {
    /// Read one line, showing `prompt`.
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError>;

    fn add_history(&mut self, line: &str);
}

impl LineReader for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.readline(prompt)
    }

    fn add_history(&mut self, line: &str) {
        if let Err(err) = self.add_history_entry(line) {
            debug!(%err, "history entry dropped");
        }
    }
}

/// Read and run lines until `quit` or end of input.
///
/// Empty lines are skipped. Ctrl-C abandons the current line and the loop
/// goes on. Returns [`Flow::Quit`] only when the user quit.
pub fn run_loop(
    session: &Session,
    reader: &mut impl LineReader,
    prompt: &str,
) -> Result<Flow, CliError> {
    let out = session.interpreter().print_handler();
    loop {
        match reader.read_line(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                reader.add_history(line);
                if session.run_line(line) == Flow::Quit {
                    return Ok(Flow::Quit);
                }
            }
            Err(ReadlineError::Interrupted) => out.println("^C"),
            Err(ReadlineError::Eof) => return Ok(Flow::Continue),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Run the interactive session on the terminal.
pub fn run(session: &Session, config: &ReplConfig) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new()?;
    if let Some(path) = &config.history {
        // A missing history file is normal on first use.
        if let Err(err) = editor.load_history(path) {
            debug!(path = %path.display(), %err, "no history loaded");
        }
    }

    session.print_banner();
    let flow = run_loop(session, &mut editor, &config.prompt);

    if let Some(path) = &config.history {
        if let Err(err) = editor.save_history(path) {
            warn!(path = %path.display(), %err, "failed to save history");
        }
    }

    if flow? == Flow::Quit {
        session.print_farewell();
    }
    Ok(())
}

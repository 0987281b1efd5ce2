//! Host-level failures of the shell.

use std::io;
use std::path::PathBuf;

/// Errors that stop the shell itself, as opposed to errors inside the
/// language, which are printed and the session goes on.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("option `{option}` needs a value")]
    MissingValue { option: &'static str },

    #[error("{0}")]
    InvalidColor(String),

    #[error("cannot read `{}`: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line editor failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

//! Command-line configuration.
//!
//! Flags are parsed by hand; the surface is small enough that a parser
//! crate would outweigh it.

use std::path::PathBuf;

use lispy_diagnostic::emitter::ColorMode;

use crate::CliError;

/// Default REPL prompt.
pub const DEFAULT_PROMPT: &str = "lispy> ";

/// Settings for one run of the shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    /// Coloring of parse diagnostics.
    pub color: ColorMode,
    /// File to load history from and save it to. `None` keeps history in
    /// memory only.
    pub history: Option<PathBuf>,
    /// Source files to run. When empty, the interactive loop starts.
    pub files: Vec<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            color: ColorMode::Auto,
            history: None,
            files: Vec::new(),
        }
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(ReplConfig),
    Help,
    Version,
}

/// Parse arguments, not including the program name.
///
/// ```text
/// lispy [--color=auto|always|never] [--no-color] [--history=FILE]
///       [--prompt=TEXT] [FILE...]
/// ```
pub fn parse_args<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = ReplConfig::default();
    let mut only_files = false;

    for arg in args {
        let arg: String = arg.into();

        if only_files || !arg.starts_with('-') {
            config.files.push(PathBuf::from(arg));
            continue;
        }

        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--no-color" => config.color = ColorMode::Never,
            "--" => only_files = true,
            _ => {
                if let Some(mode) = arg.strip_prefix("--color=") {
                    config.color = mode.parse().map_err(CliError::InvalidColor)?;
                } else if let Some(path) = arg.strip_prefix("--history=") {
                    if path.is_empty() {
                        return Err(CliError::MissingValue { option: "--history" });
                    }
                    config.history = Some(PathBuf::from(path));
                } else if let Some(prompt) = arg.strip_prefix("--prompt=") {
                    config.prompt = prompt.to_string();
                } else {
                    return Err(CliError::UnknownOption(arg));
                }
            }
        }
    }

    Ok(Command::Run(config))
}

/// Usage text for `--help`.
pub fn usage() -> String {
    format!(
        "Lispy {}\n\n\
         Usage: lispy [OPTIONS] [FILE...]\n\n\
         With no FILE, start an interactive session.\n\n\
         Options:\n  \
           --color=MODE      Color diagnostics: auto, always or never\n  \
           --no-color        Same as --color=never\n  \
           --history=FILE    Load and save line history in FILE\n  \
           --prompt=TEXT     Prompt shown before each line (default \"{}\")\n  \
           -h, --help        Print this help\n  \
           -V, --version     Print the version\n",
        crate::VERSION,
        DEFAULT_PROMPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_config(args: &[&str]) -> ReplConfig {
        match parse_args(args.iter().copied()) {
            Ok(Command::Run(config)) => config,
            other => panic!("expected a run configuration, got {other:?}"),
        }
    }

    #[test]
    fn test_no_arguments_is_interactive() {
        assert_eq!(run_config(&[]), ReplConfig::default());
    }

    #[test]
    fn test_files_and_flags() {
        let config = run_config(&["--no-color", "prelude.lspy", "--history=/tmp/h", "main.lspy"]);
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.history, Some(PathBuf::from("/tmp/h")));
        assert_eq!(
            config.files,
            vec![PathBuf::from("prelude.lspy"), PathBuf::from("main.lspy")]
        );
    }

    #[test]
    fn test_color_and_prompt() {
        let config = run_config(&["--color=always", "--prompt=> "]);
        assert_eq!(config.color, ColorMode::Always);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_double_dash_ends_options() {
        let config = run_config(&["--", "--weird-name"]);
        assert_eq!(config.files, vec![PathBuf::from("--weird-name")]);
    }

    #[test]
    fn test_help_and_version() {
        assert!(matches!(parse_args(["--help"]), Ok(Command::Help)));
        assert!(matches!(parse_args(["-V"]), Ok(Command::Version)));
    }

    #[test]
    fn test_rejects_bad_options() {
        assert!(matches!(
            parse_args(["--frobnicate"]),
            Err(CliError::UnknownOption(opt)) if opt == "--frobnicate"
        ));
        assert!(matches!(
            parse_args(["--color=sometimes"]),
            Err(CliError::InvalidColor(_))
        ));
        assert!(matches!(
            parse_args(["--history="]),
            Err(CliError::MissingValue { option: "--history" })
        ));
    }

    #[test]
    fn test_usage_mentions_options() {
        let text = usage();
        assert!(text.contains("--history=FILE"));
        assert!(text.contains(DEFAULT_PROMPT));
    }
}

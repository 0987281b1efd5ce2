//! The `lispy` binary.

use std::io::IsTerminal;
use std::process::ExitCode;

use lispy_eval::stdout_handler;
use lispyc::config::{parse_args, usage};
use lispyc::{init_tracing, repl, CliError, Command, Flow, ReplConfig, Session};

fn main() -> ExitCode {
    init_tracing();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Run `lispy --help` for usage.");
            return ExitCode::from(2);
        }
    };

    let config = match command {
        Command::Help => {
            print!("{}", usage());
            return ExitCode::SUCCESS;
        }
        Command::Version => {
            println!("lispy {}", lispyc::VERSION);
            return ExitCode::SUCCESS;
        }
        Command::Run(config) => config,
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ReplConfig) -> Result<(), CliError> {
    let session = Session::new(stdout_handler(), config.color, std::io::stdout().is_terminal());

    if config.files.is_empty() {
        return repl::run(&session, config);
    }

    for path in &config.files {
        if session.run_file(path)? == Flow::Quit {
            session.print_farewell();
            break;
        }
    }
    Ok(())
}

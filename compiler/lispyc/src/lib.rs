//! Lispy interpreter shell.
//!
//! The binary `lispy` is a thin wrapper over this library:
//! - `config`: command-line flags into a `ReplConfig`
//! - `session`: one interpreter plus the rules for echoing results and
//!   rendering parse diagnostics
//! - `repl`: the interactive loop with line editing and history

pub mod config;
mod error;
pub mod repl;
pub mod session;

use std::sync::Once;

pub use config::{Command, ReplConfig};
pub use error::CliError;
pub use session::{Flow, Session};

/// Version string shown in the banner and by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Only installs a subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=lispy_eval=debug lispy`. Output goes to stderr so it never
/// mixes with evaluation results.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

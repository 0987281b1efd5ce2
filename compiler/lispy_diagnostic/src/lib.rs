//! Diagnostic system for reporting malformed input.
//!
//! Every diagnostic carries:
//! - An error code for searchability
//! - A clear message (what went wrong)
//! - A primary span (where it went wrong)
//! - Optional notes (why, or what to try)
//!
//! Language-level runtime errors are *not* diagnostics: they are ordinary
//! `Value::Error`s that flow through evaluation. Diagnostics only describe
//! input the reader could never turn into a value.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;

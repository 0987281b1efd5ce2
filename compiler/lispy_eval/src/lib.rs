//! Lispy Eval - tree-walking interpreter for Lispy.
//!
//! # Architecture
//!
//! - `Environment`: a chain of scopes with non-owning parent links
//! - `eval` / `apply`: the evaluator and the call protocol for builtins and
//!   closures, including partial application
//! - `builtins`: the primitive library, dispatched on `Builtin`
//! - `errors`: every language-level error message, as `Value::Error`
//!
//! Language errors are ordinary values. The only non-value outcome of
//! evaluation is [`Halt`], raised by `quit`.

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod print_handler;

pub use lispy_ir::Value;

pub use builtins::register_builtins;
pub use environment::{Environment, LocalScope, Scope, WeakScope};
pub use interpreter::{apply, eval, eval_sexpr, EvalResult, Halt, Interpreter, RunError};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};

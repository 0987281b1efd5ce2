//! Tree-walking interpreter for Lispy.
//!
//! # Evaluation rules
//!
//! - `Symbol` resolves against the environment chain.
//! - `SExpr` evaluates every child left to right, then:
//!   the first `Error` child becomes the result; `()` stays `()`; a single
//!   child is unwrapped; otherwise the head is applied to the rest.
//! - Everything else evaluates to itself.
//!
//! Children are never short-circuited: a `def` to the right of an error
//! still runs before the error is reported.

mod call;

use std::ops::ControlFlow;

use lispy_ir::{ExprList, Value};
use lispy_parse::ParseError;
use lispy_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::builtins::register_builtins;
use crate::errors;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::Environment;

pub use call::apply;

/// Why evaluation stopped without producing a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Halt {
    /// `quit` was evaluated; the session should end.
    #[error("session ended by `quit`")]
    Quit,
}

/// Result of evaluating one value.
pub type EvalResult = Result<Value, Halt>;

/// Failure to run a piece of source text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Halt(#[from] Halt),
}

/// Evaluate `value` in `env`.
pub fn eval(env: &Environment, value: Value) -> EvalResult {
    ensure_sufficient_stack(|| match value {
        Value::Symbol(name) => Ok(env.get(&name)),
        Value::SExpr(list) => eval_sexpr(env, list),
        other => Ok(other),
    })
}

/// Evaluate the cells of an S-expression and apply the head to the rest.
pub fn eval_sexpr(env: &Environment, mut list: ExprList) -> EvalResult {
    for cell in list.iter_mut() {
        let value = std::mem::replace(cell, Value::sexpr());
        *cell = eval(env, value)?;
    }

    if let Some(index) = list.position_of_error() {
        return Ok(list.take_at(index).unwrap_or_else(Value::sexpr));
    }

    match list.len() {
        0 => return Ok(Value::SExpr(list)),
        1 => return Ok(list.take_at(0).unwrap_or_else(Value::sexpr)),
        _ => {}
    }

    let Some(Value::Function(func)) = list.remove_at(0) else {
        trace!("head of S-expression is not a function");
        return Ok(errors::not_a_function());
    };
    apply(env, func, list)
}

/// An interpreter session.
///
/// Owns the global environment, populated with every builtin, and the
/// handler that session output is printed through. Each interpreter is
/// isolated from every other.
pub struct Interpreter {
    env: Environment,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Create an interpreter that prints to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        let env = Environment::new();
        register_builtins(&env);
        Interpreter { env, print_handler }
    }

    /// The global environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate `value` in the global environment.
    pub fn eval(&self, value: Value) -> EvalResult {
        eval(&self.env, value)
    }

    /// Parse `source` and evaluate the whole input as one S-expression.
    ///
    /// This is the REPL rule: `+ 1 2` on its own line means `(+ 1 2)`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn eval_line(&self, source: &str) -> Result<Value, RunError> {
        let root = lispy_parse::parse(source)?;
        Ok(self.eval(lispy_parse::read(&root))?)
    }

    /// Parse `source` and evaluate each top-level expression in order,
    /// passing every result to `on_value`.
    ///
    /// Used for files. Evaluation stops at the first `quit`, or as soon as
    /// `on_value` breaks; the remaining expressions are never evaluated.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_each(
        &self,
        source: &str,
        mut on_value: impl FnMut(Value) -> ControlFlow<()>,
    ) -> Result<ControlFlow<()>, RunError> {
        let root = lispy_parse::parse(source)?;
        let Value::SExpr(exprs) = lispy_parse::read(&root) else {
            return Ok(ControlFlow::Continue(()));
        };
        for expr in exprs {
            if on_value(self.eval(expr)?).is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;

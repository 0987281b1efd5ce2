//! Centralized error constructors for the evaluator.
//!
//! Every language-level failure is a `Value::Error`, and every message is
//! spelled here. Builtins and the call protocol build their errors through
//! these functions only.
//!
//! # Usage
//!
//! ```ignore
//! use lispy_eval::errors::{division_by_zero, wrong_arg_type};
//! ```

use lispy_ir::Value;

/// Expected-type name for numeric arguments.
pub const NUMBER: &str = "Number";
/// Expected-type name for symbol arguments.
pub const SYMBOL: &str = "Symbol";
/// Expected-type name for quoted-list arguments.
pub const QEXPR: &str = "Q-Expression";

// Lookup and Application Errors

/// A symbol with no binding anywhere in the chain.
#[cold]
pub fn unbound_symbol(name: &str) -> Value {
    Value::error(format!("Unbound Symbol '{name}'"))
}

/// An S-expression whose head evaluated to something other than a function.
#[cold]
pub fn not_a_function() -> Value {
    Value::error("S-expression does not start with function")
}

/// A closure received more arguments than it has formals left.
#[cold]
pub fn lambda_arg_count(got: usize, expected: usize) -> Value {
    Value::error(format!(
        "Function passed too many arguments! Received {got}, expected {expected}"
    ))
}

// Builtin Argument Errors

/// Wrong number of arguments to a builtin.
#[cold]
pub fn wrong_arg_count(func: &str, got: usize, expected: usize) -> Value {
    Value::error(format!(
        "Function '{func}' passed too many arguments! Received {got}, expected {expected}"
    ))
}

/// An argument of the wrong type.
#[cold]
pub fn wrong_arg_type(func: &str, got: &Value, expected: &str) -> Value {
    Value::error(format!(
        "Function '{func}' passed incorrect type! Received {}, expected {expected}",
        got.type_name()
    ))
}

/// An empty list where at least one element is required.
#[cold]
pub fn empty_list(func: &str) -> Value {
    Value::error(format!("Function '{func}' passed {{}}!"))
}

/// `def` or `=` given a different number of values than symbols.
#[cold]
pub fn symbol_value_count(func: &str, got: usize, expected: usize) -> Value {
    Value::error(format!(
        "Function '{func}' passed incorrect number of values for symbols! Received {got}, expected {expected}"
    ))
}

/// A lambda formal that is not a symbol.
#[cold]
pub fn non_symbol_formal(got: &Value) -> Value {
    Value::error(format!(
        "Cannot define non-symbol! Received {}, expected {SYMBOL}",
        got.type_name()
    ))
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> Value {
    Value::error("Division by zero")
}

//! Runtime values for the Lispy interpreter.
//!
//! `Value` is a closed sum type with one payload shape per tag. Terminal
//! values (`Number`, `Error`, `Symbol`) are immutable; the two list forms
//! share one container type, `ExprList`, and differ only in how the
//! evaluator treats them.
//!
//! # Copy semantics
//!
//! `Clone` is the deep `copy` operation: lists clone every child, closures
//! clone their formals, body and captured bindings. Builtins are plain
//! identities and copy for free.

mod bindings;
mod display;
mod expr_list;
mod function;

pub use bindings::Bindings;
pub use expr_list::ExprList;
pub use function::{Closure, Function};

use crate::Builtin;

/// Runtime value in the Lispy interpreter.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The single numeric representation.
    Number(f64),
    /// A first-class error token carrying its message.
    Error(String),
    /// An identifier, resolved against an environment during evaluation.
    Symbol(String),
    /// A builtin primitive or a user-defined closure.
    Function(Function),
    /// Evaluable list: evaluating it applies the first element to the rest.
    SExpr(ExprList),
    /// Quoted list: inert data, parameter lists and deferred code.
    QExpr(ExprList),
}

// Factory methods
impl Value {
    /// Create a number value.
    #[inline]
    pub fn number(x: f64) -> Self {
        Value::Number(x)
    }

    /// Create an error value.
    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    /// Create a symbol value.
    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Create an empty S-expression `()`.
    #[inline]
    pub fn sexpr() -> Self {
        Value::SExpr(ExprList::new())
    }

    /// Create an empty Q-expression `{}`.
    #[inline]
    pub fn qexpr() -> Self {
        Value::QExpr(ExprList::new())
    }

    /// Create a builtin function value.
    #[inline]
    pub fn builtin(builtin: Builtin) -> Self {
        Value::Function(Function::Builtin(builtin))
    }

    /// Create a closure with a fresh, empty captured scope.
    pub fn lambda(formals: ExprList, body: ExprList) -> Self {
        Value::Function(Function::Closure(Box::new(Closure::new(formals, body))))
    }
}

// Inspection
impl Value {
    /// Human-readable name of this value's tag, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::Function(_) => "Function",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }
}

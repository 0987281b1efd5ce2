//! Function values: builtin identities and user-defined closures.

use super::{Bindings, ExprList};
use crate::Builtin;

/// A callable value.
#[derive(Clone, Debug, PartialEq)]
pub enum Function {
    /// Native primitive. Copying it copies only the tag.
    Builtin(Builtin),
    /// User-defined function. Boxed to keep `Value` small.
    Closure(Box<Closure>),
}

/// A user-defined function built by `\`.
///
/// `env` is owned by the closure alone. Partial application binds
/// parameters into it and moves the bound formals out of `formals`, so a
/// curried closure carries both the remaining formals and the arguments it
/// has already received.
#[derive(Clone, Debug, PartialEq)]
pub struct Closure {
    /// Remaining parameter symbols, in order.
    pub formals: ExprList,
    /// Body cells, evaluated as an S-expression when the call saturates.
    pub body: ExprList,
    /// Captured scope that receives parameter bindings.
    pub env: Bindings,
}

impl Closure {
    /// Create a closure with an empty captured scope.
    pub fn new(formals: ExprList, body: ExprList) -> Self {
        Closure {
            formals,
            body,
            env: Bindings::new(),
        }
    }

    /// Whether every formal has been bound.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.formals.is_empty()
    }
}

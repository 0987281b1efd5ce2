//! Lispy IR - core data structures for the Lispy interpreter.
//!
//! This crate contains:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - `Value`, the closed sum type every other crate builds on
//! - `ExprList`, the owned sequence behind S- and Q-expressions
//! - `Function`, `Closure` and the `Builtin` primitive identities
//! - `Bindings`, the ordered name/value table a scope is made of
//!
//! # Ownership
//!
//! Values never share structure. Every list owns its elements, every closure
//! owns its formals, body and captured bindings, and `Clone` is a deep copy.
//! Removing an element from a list moves it out; nothing is ever aliased.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod builtin;
mod span;
mod token;
mod value;

pub use builtin::Builtin;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use value::{Bindings, Closure, ExprList, Function, Value};

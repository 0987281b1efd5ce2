//! Reader: syntax tree to `Value`.
//!
//! Classifies nodes by their tag and builds values recursively. Delimiter
//! and anchor children are skipped.

use lispy_ir::{ExprList, Value};
use lispy_stack::ensure_sufficient_stack;

use crate::{NodeTag, SyntaxNode};

/// Message for numeric literals that do not fit an `f64`.
pub const INVALID_NUMBER: &str = "Invalid Number";

/// Build the value a syntax node denotes.
///
/// The `Root` node reads as one S-expression holding every top-level
/// expression. Reading a lone `Delimiter` or `Anchor` yields `()`.
pub fn read(node: &SyntaxNode) -> Value {
    ensure_sufficient_stack(|| match node.tag {
        NodeTag::Number => read_number(node.text()),
        NodeTag::Symbol => Value::symbol(node.text()),
        NodeTag::Root | NodeTag::SExpr => Value::SExpr(read_children(node)),
        NodeTag::QExpr => Value::QExpr(read_children(node)),
        NodeTag::Delimiter | NodeTag::Anchor => Value::sexpr(),
    })
}

fn read_children(node: &SyntaxNode) -> ExprList {
    node.content().map(read).collect()
}

/// Parse a numeric literal. Out-of-range literals become an error value.
pub fn read_number(text: &str) -> Value {
    match text.parse::<f64>() {
        Ok(x) if x.is_finite() => Value::Number(x),
        _ => Value::error(INVALID_NUMBER),
    }
}

//! Textual rendering of values.
//!
//! Pure projection: no value is changed by printing it.

use std::fmt;

use super::{ExprList, Function, Value};

/// Marker printed in front of every error message.
const ERROR_MARKER: &str = "Error: ";

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(x) if x.is_nan() => f.write_str("nan"),
            Value::Number(x) => write!(f, "{x:.2}"),
            Value::Error(message) => write!(f, "{ERROR_MARKER}{message}"),
            Value::Symbol(name) => f.write_str(name),
            Value::Function(func) => write!(f, "{func}"),
            Value::SExpr(list) => write_cells(f, list, '(', ')'),
            Value::QExpr(list) => write_cells(f, list, '{', '}'),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Builtin(_) => f.write_str("<builtin>"),
            Function::Closure(closure) => {
                f.write_str("(\\ ")?;
                write_cells(f, &closure.formals, '{', '}')?;
                f.write_str(" ")?;
                write_cells(f, &closure.body, '{', '}')?;
                f.write_str(")")
            }
        }
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, list: &ExprList, open: char, close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, cell) in list.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{cell}")?;
    }
    write!(f, "{close}")
}

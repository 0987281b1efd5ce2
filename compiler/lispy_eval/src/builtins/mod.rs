//! The primitive library.
//!
//! Every builtin receives the calling environment and owns its argument
//! list. Argument checks produce error values through `crate::errors`;
//! only `quit` produces a [`Halt`](crate::Halt).

mod arith;
mod binding;
mod control;
mod list;

use lispy_ir::{Builtin, ExprList, Value};

use crate::interpreter::{EvalResult, Halt};
use crate::{errors, Environment};

use arith::ArithOp;

/// Outcome of argument checking; `Err` carries the error value to return.
type Checked<T> = Result<T, Value>;

/// Bind every builtin in `env` under its name.
pub fn register_builtins(env: &Environment) {
    for builtin in Builtin::ALL {
        env.put(builtin.name(), Value::builtin(builtin));
    }
}

/// Dispatch a call to `builtin`.
pub(crate) fn call(env: &Environment, builtin: Builtin, args: ExprList) -> EvalResult {
    let checked = match builtin {
        // Lists
        Builtin::List => Ok(list::list(args)),
        Builtin::Head => list::head(args),
        Builtin::Tail => list::tail(args),
        Builtin::Join => list::join(args),
        Builtin::Eval => return list::eval(env, args),
        Builtin::Init => list::init(args),
        Builtin::Cons => list::cons(args),
        Builtin::Len => list::len(args),
        Builtin::Rev => list::rev(args),

        // Control
        Builtin::If => return control::if_(env, args),
        Builtin::Bool => return control::bool(env, args),

        // Arithmetic and bitwise
        Builtin::Add => arith::call(ArithOp::Add, args),
        Builtin::Sub => arith::call(ArithOp::Sub, args),
        Builtin::Mul => arith::call(ArithOp::Mul, args),
        Builtin::Div => arith::call(ArithOp::Div, args),
        Builtin::Mod => arith::call(ArithOp::Mod, args),
        Builtin::BitAnd => arith::call(ArithOp::BitAnd, args),
        Builtin::BitOr => arith::call(ArithOp::BitOr, args),
        Builtin::Not => arith::call(ArithOp::Not, args),
        Builtin::BitNot => arith::call(ArithOp::BitNot, args),
        Builtin::BitXor => arith::call(ArithOp::BitXor, args),
        Builtin::Pow => arith::call(ArithOp::Pow, args),
        Builtin::ShiftRight => arith::call(ArithOp::ShiftRight, args),
        Builtin::ShiftLeft => arith::call(ArithOp::ShiftLeft, args),
        Builtin::Min => arith::call(ArithOp::Min, args),
        Builtin::Max => arith::call(ArithOp::Max, args),

        // Binding
        Builtin::Def => binding::def(env, args),
        Builtin::Put => binding::put(env, args),
        Builtin::Lambda => binding::lambda(args),
        Builtin::Env => Ok(binding::env(env)),
        Builtin::Quit => return Err(Halt::Quit),
    };
    Ok(checked.unwrap_or_else(|error| error))
}

/// Check that exactly `expected` arguments were passed.
fn expect_count(func: &str, args: &ExprList, expected: usize) -> Checked<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(errors::wrong_arg_count(func, args.len(), expected))
    }
}

/// Take the single quoted-list argument of a one-argument builtin.
fn single_qexpr(func: &str, args: ExprList) -> Checked<ExprList> {
    expect_count(func, &args, 1)?;
    match args.take_at(0) {
        Some(Value::QExpr(list)) => Ok(list),
        Some(other) => Err(errors::wrong_arg_type(func, &other, errors::QEXPR)),
        None => Err(errors::wrong_arg_count(func, 0, 1)),
    }
}

#[cfg(test)]
mod tests;

//! Control builtins: `?` and `bool`.

use lispy_ir::{ExprList, Value};

use super::{expect_count, Checked};
use crate::interpreter::{eval, EvalResult};
use crate::{errors, Environment};

/// `?`: `(? cond {then} {else})`.
///
/// A nonzero condition evaluates `then` as an S-expression, zero evaluates
/// `else`. The branch not taken is dropped unevaluated.
pub(super) fn if_(env: &Environment, args: ExprList) -> EvalResult {
    match branch(args) {
        Ok(chosen) => eval(env, Value::SExpr(chosen)),
        Err(error) => Ok(error),
    }
}

fn branch(args: ExprList) -> Checked<ExprList> {
    expect_count("?", &args, 3)?;
    let mut cells = args.into_iter();
    let (Some(cond), Some(then), Some(otherwise)) = (cells.next(), cells.next(), cells.next())
    else {
        return Err(errors::wrong_arg_count("?", 0, 3));
    };

    let Value::Number(condition) = cond else {
        return Err(errors::wrong_arg_type("?", &cond, errors::NUMBER));
    };
    let then = quoted(then)?;
    let otherwise = quoted(otherwise)?;

    Ok(if condition == 0.0 { otherwise } else { then })
}

fn quoted(value: Value) -> Checked<ExprList> {
    match value {
        Value::QExpr(list) => Ok(list),
        other => Err(errors::wrong_arg_type("?", &other, errors::QEXPR)),
    }
}

/// `bool`: truthiness of a single value.
///
/// A symbol is resolved first. Numbers are returned as they are, a quoted
/// list gives its length, anything else is `0`.
pub(super) fn bool(env: &Environment, args: ExprList) -> EvalResult {
    if let Err(error) = expect_count("bool", &args, 1) {
        return Ok(error);
    }
    let Some(arg) = args.take_at(0) else {
        return Ok(errors::wrong_arg_count("bool", 0, 1));
    };
    let resolved = match arg {
        symbol @ Value::Symbol(_) => eval(env, symbol)?,
        other => other,
    };
    Ok(match resolved {
        number @ Value::Number(_) => number,
        Value::QExpr(list) => Value::Number(list.len() as f64),
        _ => Value::Number(0.0),
    })
}

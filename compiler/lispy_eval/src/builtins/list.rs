//! List builtins: `list head tail join eval init cons len rev`.

use lispy_ir::{ExprList, Value};

use super::{expect_count, single_qexpr, Checked};
use crate::interpreter::{eval as eval_value, EvalResult};
use crate::{errors, Environment};

/// `list`: the arguments, quoted.
pub(super) fn list(args: ExprList) -> Value {
    Value::QExpr(args)
}

/// `head`: a list holding only the first element.
pub(super) fn head(args: ExprList) -> Checked<Value> {
    let mut list = non_empty("head", args)?;
    list.truncate(1);
    Ok(Value::QExpr(list))
}

/// `tail`: everything but the first element.
pub(super) fn tail(args: ExprList) -> Checked<Value> {
    let mut list = non_empty("tail", args)?;
    list.remove_at(0);
    Ok(Value::QExpr(list))
}

/// `join`: concatenate any number of quoted lists. `(join)` is `{}`.
pub(super) fn join(args: ExprList) -> Checked<Value> {
    if let Some(bad) = args.iter().find(|arg| !matches!(arg, Value::QExpr(_))) {
        return Err(errors::wrong_arg_type("join", bad, errors::QEXPR));
    }
    let mut joined = ExprList::new();
    for arg in args {
        if let Value::QExpr(list) = arg {
            joined.concatenate_into(list);
        }
    }
    Ok(Value::QExpr(joined))
}

/// `eval`: evaluate a quoted list as an S-expression.
pub(super) fn eval(env: &Environment, args: ExprList) -> EvalResult {
    match single_qexpr("eval", args) {
        Ok(list) => eval_value(env, Value::SExpr(list)),
        Err(error) => Ok(error),
    }
}

/// `init`: everything but the last element.
pub(super) fn init(args: ExprList) -> Checked<Value> {
    let mut list = non_empty("init", args)?;
    list.truncate(list.len() - 1);
    Ok(Value::QExpr(list))
}

/// `cons`: prepend a value onto a quoted list.
pub(super) fn cons(mut args: ExprList) -> Checked<Value> {
    expect_count("cons", &args, 2)?;
    let (Some(value), Some(target)) = (args.remove_at(0), args.remove_at(0)) else {
        return Err(errors::wrong_arg_count("cons", 0, 2));
    };
    match target {
        Value::QExpr(mut list) => {
            list.prepend(value);
            Ok(Value::QExpr(list))
        }
        other => Err(errors::wrong_arg_type("cons", &other, errors::QEXPR)),
    }
}

/// `len`: element count as a number.
pub(super) fn len(args: ExprList) -> Checked<Value> {
    let list = single_qexpr("len", args)?;
    Ok(Value::Number(list.len() as f64))
}

/// `rev`: the elements in reverse order.
pub(super) fn rev(args: ExprList) -> Checked<Value> {
    let list = single_qexpr("rev", args)?;
    let mut reversed = ExprList::new();
    for value in list {
        reversed.prepend(value);
    }
    Ok(Value::QExpr(reversed))
}

fn non_empty(func: &str, args: ExprList) -> Checked<ExprList> {
    let list = single_qexpr(func, args)?;
    if list.is_empty() {
        return Err(errors::empty_list(func));
    }
    Ok(list)
}

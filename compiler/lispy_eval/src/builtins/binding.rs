//! Binding builtins: `def`, `=`, `\` and `env`.

use lispy_ir::{ExprList, Value};

use super::{expect_count, Checked};
use crate::{errors, Environment};

/// Where `def` and `=` store their bindings.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Target {
    /// The root of the chain.
    Global,
    /// The calling scope only.
    Local,
}

/// `def`: `(def {a b} 1 2)` binds in the global scope.
pub(super) fn def(env: &Environment, args: ExprList) -> Checked<Value> {
    bind(env, "def", Target::Global, args)
}

/// `=`: `(= {a b} 1 2)` binds in the current scope.
pub(super) fn put(env: &Environment, args: ExprList) -> Checked<Value> {
    bind(env, "=", Target::Local, args)
}

fn bind(env: &Environment, func: &str, target: Target, mut args: ExprList) -> Checked<Value> {
    let symbols = match args.remove_at(0) {
        Some(Value::QExpr(symbols)) => symbols,
        Some(other) => return Err(errors::wrong_arg_type(func, &other, errors::QEXPR)),
        None => return Err(errors::wrong_arg_count(func, 0, 1)),
    };

    let mut names = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        match symbol {
            Value::Symbol(name) => names.push(name),
            other => return Err(errors::wrong_arg_type(func, &other, errors::SYMBOL)),
        }
    }

    if names.len() != args.len() {
        return Err(errors::symbol_value_count(func, args.len(), names.len()));
    }

    for (name, value) in names.iter().zip(args) {
        match target {
            Target::Global => env.def(name, value),
            Target::Local => env.put(name, value),
        }
    }
    Ok(Value::sexpr())
}

/// `\`: `(\ {formals} {body})` builds a closure with an empty scope.
pub(super) fn lambda(args: ExprList) -> Checked<Value> {
    expect_count("\\", &args, 2)?;
    let mut cells = args.into_iter();
    let (Some(formals), Some(body)) = (cells.next(), cells.next()) else {
        return Err(errors::wrong_arg_count("\\", 0, 2));
    };

    let formals = match formals {
        Value::QExpr(list) => list,
        other => return Err(errors::wrong_arg_type("\\", &other, errors::QEXPR)),
    };
    let body = match body {
        Value::QExpr(list) => list,
        other => return Err(errors::wrong_arg_type("\\", &other, errors::QEXPR)),
    };

    if let Some(bad) = formals.iter().find(|formal| formal.as_symbol().is_none()) {
        return Err(errors::non_symbol_formal(bad));
    }
    Ok(Value::lambda(formals, body))
}

/// `env`: the current scope as `{ {name value} ... }`.
///
/// Arguments are ignored.
pub(super) fn env(env: &Environment) -> Value {
    let pairs = env
        .entries()
        .into_iter()
        .map(|(name, value)| Value::QExpr(ExprList::new().with(Value::Symbol(name)).with(value)))
        .collect();
    Value::QExpr(pairs)
}

//! The call protocol for builtins and closures.

use lispy_ir::{Closure, ExprList, Function, Value};
use tracing::debug;

use super::{eval_sexpr, EvalResult};
use crate::builtins;
use crate::errors;
use crate::Environment;

/// Apply `func` to `args`, which it takes ownership of.
pub fn apply(env: &Environment, func: Function, args: ExprList) -> EvalResult {
    match func {
        Function::Builtin(builtin) => {
            debug!(builtin = builtin.name(), argc = args.len(), "call builtin");
            builtins::call(env, builtin, args)
        }
        Function::Closure(closure) => call_closure(env, *closure, args),
    }
}

/// Bind arguments to formals positionally.
///
/// `closure` is always an owned copy, so binding into its scope never
/// touches a closure stored in an environment. Fewer arguments than
/// formals returns the partially bound closure. Once every formal is
/// bound, the bindings move into a call frame linked to the caller and the
/// body runs there; the frame is dropped when the call returns.
fn call_closure(env: &Environment, mut closure: Closure, args: ExprList) -> EvalResult {
    let given = args.len();
    let total = closure.formals.len();

    for arg in args {
        let Some(formal) = closure.formals.remove_at(0) else {
            return Ok(errors::lambda_arg_count(given, total));
        };
        match formal {
            Value::Symbol(name) => closure.env.put(&name, arg),
            other => return Ok(errors::non_symbol_formal(&other)),
        }
    }

    if !closure.is_saturated() {
        debug!(remaining = closure.formals.len(), "partial application");
        return Ok(Value::Function(Function::Closure(Box::new(closure))));
    }

    debug!(argc = given, "call closure");
    let Closure { body, env: bound, .. } = closure;
    let frame = Environment::frame(bound, env);
    eval_sexpr(&frame, body)
}

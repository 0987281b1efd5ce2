use super::*;
use crate::interpreter::apply;
use crate::{Interpreter, RunError};
use lispy_ir::Function;

/// Evaluate one REPL line and render the result.
fn run(interp: &Interpreter, source: &str) -> String {
    match interp.eval_line(source) {
        Ok(value) => value.to_string(),
        Err(err) => format!("{err}"),
    }
}

fn run_fresh(source: &str) -> String {
    run(&Interpreter::new(), source)
}

fn call_builtin(builtin: Builtin, args: ExprList) -> EvalResult {
    apply(&Environment::new(), Function::Builtin(builtin), args)
}

mod arithmetic {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_folds_left_to_right() {
        assert_eq!(run_fresh("+ 1 2 3"), "6.00");
        assert_eq!(run_fresh("- 10 4 1"), "5.00");
        assert_eq!(run_fresh("* 2 3 4"), "24.00");
        assert_eq!(run_fresh("/ 10 4"), "2.50");
        assert_eq!(run_fresh("min 3 1 2"), "1.00");
        assert_eq!(run_fresh("max 3 1 2"), "3.00");
        assert_eq!(run_fresh("** 2 10"), "1024.00");
    }

    #[test]
    fn test_unary_forms() {
        assert_eq!(run_fresh("- 5"), "-5.00");
        assert_eq!(run_fresh("! 0"), "1.00");
        assert_eq!(run_fresh("! 7"), "0.00");
        assert_eq!(run_fresh("~ 5"), "-6.00");
        assert_eq!(run_fresh("+ 5"), "5.00");
    }

    #[test]
    fn test_integer_operators() {
        assert_eq!(run_fresh("% 7 3"), "1.00");
        assert_eq!(run_fresh("& 6 3"), "2.00");
        assert_eq!(run_fresh("| 6 3"), "7.00");
        assert_eq!(run_fresh("^ 6 3"), "5.00");
        assert_eq!(run_fresh("<< 1 3"), "8.00");
        assert_eq!(run_fresh(">> 8 2"), "2.00");
    }

    #[test]
    fn test_division_by_zero_aborts_fold() {
        assert_eq!(run_fresh("/ 1 0"), "Error: Division by zero");
        assert_eq!(run_fresh("/ 0 0"), "Error: Division by zero");
        assert_eq!(run_fresh("/ 8 0 2"), "Error: Division by zero");
        assert_eq!(run_fresh("% 7 0"), "Error: Division by zero");
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert_eq!(
            run_fresh("+ 1 {2}"),
            "Error: Function '+' passed incorrect type! Received Q-Expression, expected Number"
        );
    }

    #[test]
    fn test_inverting_operators_return_first_of_many() {
        assert_eq!(run_fresh("! 1 2"), "1.00");
        assert_eq!(run_fresh("~ 5 1 9"), "5.00");
        assert_eq!(run_fresh("! 0"), "1.00");
    }

    #[test]
    fn test_no_operands() {
        assert_eq!(
            call_builtin(Builtin::Add, ExprList::new()),
            Ok(Value::error(
                "Function '+' passed too many arguments! Received 0, expected 1"
            ))
        );
    }
}

mod lists {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_quotes_arguments() {
        assert_eq!(run_fresh("list 1 2 3"), "{1.00 2.00 3.00}");
    }

    #[test]
    fn test_head_and_tail() {
        assert_eq!(run_fresh("head {1 2 3}"), "{1.00}");
        assert_eq!(run_fresh("tail {1 2 3}"), "{2.00 3.00}");
        assert_eq!(run_fresh("tail {1}"), "{}");
    }

    #[test]
    fn test_empty_list_errors() {
        assert_eq!(run_fresh("head {}"), "Error: Function 'head' passed {}!");
        assert_eq!(run_fresh("tail {}"), "Error: Function 'tail' passed {}!");
        assert_eq!(run_fresh("init {}"), "Error: Function 'init' passed {}!");
    }

    #[test]
    fn test_single_argument_checks() {
        assert_eq!(
            run_fresh("head {1} {2}"),
            "Error: Function 'head' passed too many arguments! Received 2, expected 1"
        );
        assert_eq!(
            run_fresh("len 1"),
            "Error: Function 'len' passed incorrect type! Received Number, expected Q-Expression"
        );
    }

    #[test]
    fn test_join() {
        assert_eq!(run_fresh("join {1 2} {3 4}"), "{1.00 2.00 3.00 4.00}");
        assert_eq!(run_fresh("join {1} {} {x}"), "{1.00 x}");
        assert_eq!(
            run_fresh("join {1} 2"),
            "Error: Function 'join' passed incorrect type! Received Number, expected Q-Expression"
        );
        assert_eq!(call_builtin(Builtin::Join, ExprList::new()), Ok(Value::qexpr()));
    }

    #[test]
    fn test_eval_runs_quoted_code() {
        assert_eq!(run_fresh("eval {+ 1 2}"), "3.00");
        assert_eq!(run_fresh("eval (list + 1 2)"), "3.00");
        assert_eq!(run_fresh("eval {}"), "()");
    }

    #[test]
    fn test_init_cons_len_rev() {
        assert_eq!(run_fresh("init {1 2 3}"), "{1.00 2.00}");
        assert_eq!(run_fresh("cons 1 {2 3}"), "{1.00 2.00 3.00}");
        assert_eq!(run_fresh("cons {1} {}"), "{{1.00}}");
        assert_eq!(run_fresh("len {1 2 3}"), "3.00");
        assert_eq!(run_fresh("len {}"), "0.00");
        assert_eq!(run_fresh("rev {1 2 3}"), "{3.00 2.00 1.00}");
    }

    #[test]
    fn test_cons_requires_list_second() {
        assert_eq!(
            run_fresh("cons 1 2"),
            "Error: Function 'cons' passed incorrect type! Received Number, expected Q-Expression"
        );
        assert_eq!(
            run_fresh("cons 1"),
            "Error: Function 'cons' passed too many arguments! Received 1, expected 2"
        );
    }
}

mod control {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_if_evaluates_chosen_branch() {
        assert_eq!(run_fresh("? 1 {+ 1 1} {+ 2 2}"), "2.00");
        assert_eq!(run_fresh("? 0 {+ 1 1} {+ 2 2}"), "4.00");
        assert_eq!(run_fresh("? 1 {} {2}"), "()");
    }

    #[test]
    fn test_if_skips_other_branch() {
        let interp = Interpreter::new();
        run(&interp, "? 1 {def {taken} 1} {def {skipped} 1}");
        assert_eq!(run(&interp, "taken"), "1.00");
        assert_eq!(run(&interp, "skipped"), "Error: Unbound Symbol 'skipped'");
    }

    #[test]
    fn test_if_argument_checks() {
        assert_eq!(
            run_fresh("? {1} {1} {2}"),
            "Error: Function '?' passed incorrect type! Received Q-Expression, expected Number"
        );
        assert_eq!(
            run_fresh("? 1 1 {2}"),
            "Error: Function '?' passed incorrect type! Received Number, expected Q-Expression"
        );
        assert_eq!(
            run_fresh("? 1 {2}"),
            "Error: Function '?' passed too many arguments! Received 2, expected 3"
        );
    }

    #[test]
    fn test_bool() {
        assert_eq!(run_fresh("bool 5"), "5.00");
        assert_eq!(run_fresh("bool {1 2}"), "2.00");
        assert_eq!(run_fresh("bool (\\ {x} {x})"), "0.00");
    }

    #[test]
    fn test_bool_resolves_symbols() {
        let env = Environment::new();
        env.put("flag", Value::Number(3.0));
        let args = ExprList::new().with(Value::symbol("flag"));
        assert_eq!(
            apply(&env, Function::Builtin(Builtin::Bool), args),
            Ok(Value::Number(3.0))
        );
    }
}

mod binding {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_def_binds_many() {
        let interp = Interpreter::new();
        assert_eq!(run(&interp, "def {a b} 1 2"), "()");
        assert_eq!(run(&interp, "+ a b"), "3.00");
    }

    #[test]
    fn test_def_argument_checks() {
        assert_eq!(
            run_fresh("def {a} 1 2"),
            "Error: Function 'def' passed incorrect number of values for symbols! Received 2, expected 1"
        );
        assert_eq!(
            run_fresh("def {1} 2"),
            "Error: Function 'def' passed incorrect type! Received Number, expected Symbol"
        );
        assert_eq!(
            run_fresh("= 1 2"),
            "Error: Function '=' passed incorrect type! Received Number, expected Q-Expression"
        );
    }

    #[test]
    fn test_put_at_top_level_is_global() {
        let interp = Interpreter::new();
        run(&interp, "= {x} 4");
        assert_eq!(run(&interp, "x"), "4.00");
    }

    #[test]
    fn test_lambda_construction() {
        assert_eq!(run_fresh("\\ {x} {+ x 1}"), "(\\ {x} {+ x 1})");
        assert_eq!(
            run_fresh("\\ {x 1} {x}"),
            "Error: Cannot define non-symbol! Received Number, expected Symbol"
        );
        assert_eq!(
            run_fresh("\\ {x}"),
            "Error: Function '\\' passed too many arguments! Received 1, expected 2"
        );
    }

    #[test]
    fn test_env_lists_current_scope() {
        let env = Environment::new();
        env.put("x", Value::Number(1.0));
        env.put("f", Value::builtin(Builtin::Head));
        assert_eq!(
            apply(&env, Function::Builtin(Builtin::Env), ExprList::new())
                .map(|value| value.to_string()),
            Ok("{{x 1.00} {f <builtin>}}".to_string())
        );
    }

    #[test]
    fn test_global_env_has_every_builtin() {
        let interp = Interpreter::new();
        assert_eq!(interp.env().len(), Builtin::ALL.len());
        assert_eq!(run(&interp, "len (env 0)"), "31.00");
    }

    #[test]
    fn test_quit_halts() {
        let interp = Interpreter::new();
        assert_eq!(interp.eval_line("quit 0"), Err(RunError::Halt(Halt::Quit)));
    }
}

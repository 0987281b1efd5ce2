use super::*;
use std::ops::ControlFlow;

use crate::print_handler::buffer_handler;
use lispy_parse::ParseError;
use lispy_ir::Span;

fn run(interp: &Interpreter, source: &str) -> String {
    match interp.eval_line(source) {
        Ok(value) => value.to_string(),
        Err(err) => format!("{err}"),
    }
}

mod evaluation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_atoms_evaluate_to_themselves() {
        let env = Environment::new();
        assert_eq!(eval(&env, Value::Number(2.0)), Ok(Value::Number(2.0)));
        assert_eq!(eval(&env, Value::error("x")), Ok(Value::error("x")));
        assert_eq!(eval(&env, Value::qexpr()), Ok(Value::qexpr()));
    }

    #[test]
    fn test_symbol_resolves() {
        let env = Environment::new();
        env.put("x", Value::Number(5.0));
        assert_eq!(eval(&env, Value::symbol("x")), Ok(Value::Number(5.0)));
        assert_eq!(
            eval(&env, Value::symbol("y")),
            Ok(Value::error("Unbound Symbol 'y'"))
        );
    }

    #[test]
    fn test_empty_and_single_expressions() {
        let interp = Interpreter::new();
        assert_eq!(run(&interp, ""), "()");
        assert_eq!(run(&interp, "()"), "()");
        assert_eq!(run(&interp, "(5)"), "5.00");
        assert_eq!(run(&interp, "head"), "<builtin>");
    }

    #[test]
    fn test_head_must_be_function() {
        let interp = Interpreter::new();
        assert_eq!(
            run(&interp, "1 2 3"),
            "Error: S-expression does not start with function"
        );
    }

    #[test]
    fn test_first_error_wins() {
        let interp = Interpreter::new();
        assert_eq!(
            run(&interp, "+ (head {}) nope"),
            "Error: Function 'head' passed {}!"
        );
    }

    #[test]
    fn test_all_children_run_before_error_scan() {
        let interp = Interpreter::new();
        assert_eq!(
            run(&interp, "(+ 1 (/ 1 0) (def {y} 99))"),
            "Error: Division by zero"
        );
        assert_eq!(run(&interp, "y"), "99.00");
    }

    #[test]
    fn test_deeply_nested_expression() {
        let depth = 1_000;
        let source = format!("{}+ 1 1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(run(&Interpreter::new(), &source), "2.00");
    }
}

mod closures {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_saturated_call() {
        let interp = Interpreter::new();
        assert_eq!(run(&interp, "((\\ {a b} {+ a b}) 3 4)"), "7.00");
    }

    #[test]
    fn test_partial_application_returns_function() {
        let interp = Interpreter::new();
        assert_eq!(
            run(&interp, "((\\ {a b} {+ a b}) 3)"),
            "(\\ {b} {+ a b})"
        );
        run(&interp, "def {add3} ((\\ {a b} {+ a b}) 3)");
        assert_eq!(run(&interp, "add3 4"), "7.00");
        assert_eq!(run(&interp, "add3 10"), "13.00");
    }

    #[test]
    fn test_too_many_arguments() {
        let interp = Interpreter::new();
        assert_eq!(
            run(&interp, "(\\ {x} {x}) 1 2"),
            "Error: Function passed too many arguments! Received 2, expected 1"
        );
    }

    #[test]
    fn test_def_reaches_global_from_nested_scope() {
        let interp = Interpreter::new();
        run(&interp, "def {x} 5");
        run(&interp, "def {peek} (\\ {_} {x})");
        assert_eq!(run(&interp, "peek 0"), "5.00");
        run(&interp, "def {setg} (\\ {v} {def {g} v})");
        run(&interp, "setg 8");
        assert_eq!(run(&interp, "g"), "8.00");
    }

    #[test]
    fn test_local_put_does_not_touch_global() {
        let interp = Interpreter::new();
        run(&interp, "def {x} 5");
        run(&interp, "def {shadow} (\\ {_} {= {x} 9})");
        assert_eq!(run(&interp, "shadow 0"), "()");
        assert_eq!(run(&interp, "x"), "5.00");
        // A second call through the same stored closure behaves the same.
        run(&interp, "shadow 0");
        assert_eq!(run(&interp, "x"), "5.00");
    }

    #[test]
    fn test_stored_closure_is_not_mutated_by_calls() {
        let interp = Interpreter::new();
        run(&interp, "def {inc} (\\ {n} {+ n 1})");
        assert_eq!(run(&interp, "inc 1"), "2.00");
        assert_eq!(run(&interp, "inc 41"), "42.00");
        assert_eq!(run(&interp, "inc"), "(\\ {n} {+ n 1})");
    }

    #[test]
    fn test_callee_sees_caller_locals() {
        let interp = Interpreter::new();
        run(&interp, "def {show} (\\ {_} {z})");
        run(&interp, "def {wrap} (\\ {z} {show 0})");
        assert_eq!(run(&interp, "wrap 42"), "42.00");
        assert_eq!(run(&interp, "show 0"), "Error: Unbound Symbol 'z'");
    }

    #[test]
    fn test_recursion() {
        let interp = Interpreter::new();
        run(
            &interp,
            "def {fact} (\\ {n} {? n {* n (fact (- n 1))} {1}})",
        );
        assert_eq!(run(&interp, "fact 5"), "120.00");
        assert_eq!(run(&interp, "fact 0"), "1.00");
    }

    #[test]
    fn test_curried_definition_helper() {
        let interp = Interpreter::new();
        run(
            &interp,
            "def {fun} (\\ {args body} {def (head args) (\\ (tail args) body)})",
        );
        run(&interp, "fun {add-together x y} {+ x y}");
        assert_eq!(run(&interp, "add-together 2 3"), "5.00");
    }
}

mod session {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_global_state_persists_across_lines() {
        let interp = Interpreter::new();
        run(&interp, "def {counter} 1");
        run(&interp, "def {counter} (+ counter 1)");
        assert_eq!(run(&interp, "counter"), "2.00");
    }

    #[test]
    fn test_interpreters_are_isolated() {
        let first = Interpreter::new();
        let second = Interpreter::new();
        run(&first, "def {only} 1");
        assert_eq!(run(&second, "only"), "Error: Unbound Symbol 'only'");
    }

    #[test]
    fn test_parse_failure_is_reported() {
        let interp = Interpreter::new();
        assert_eq!(
            interp.eval_line("(+ 1"),
            Err(RunError::Parse(ParseError::UnclosedDelimiter {
                open: '(',
                open_span: Span::new(0, 1),
                end: Span::point(4),
            }))
        );
    }

    #[test]
    fn test_reader_number_error_propagates() {
        let interp = Interpreter::new();
        let huge = "9".repeat(400);
        assert_eq!(run(&interp, &format!("+ 1 {huge}")), "Error: Invalid Number");
    }

    #[test]
    fn test_eval_each_runs_top_level_forms() {
        let interp = Interpreter::new();
        let mut seen = Vec::new();
        let result = interp.eval_each("(def {a} 1) (+ a 1) (/ 1 0)", |value| {
            seen.push(value.to_string());
            ControlFlow::Continue(())
        });
        assert_eq!(result, Ok(ControlFlow::Continue(())));
        assert_eq!(seen, vec!["()", "2.00", "Error: Division by zero"]);
    }

    #[test]
    fn test_eval_each_stops_at_quit() {
        let interp = Interpreter::new();
        let mut seen = Vec::new();
        let result = interp.eval_each("(+ 1 1) (quit 0) (def {never} 1)", |value| {
            seen.push(value.to_string());
            ControlFlow::Continue(())
        });
        assert_eq!(result, Err(RunError::Halt(Halt::Quit)));
        assert_eq!(seen, vec!["2.00"]);
        assert_eq!(run(&interp, "never"), "Error: Unbound Symbol 'never'");
    }

    #[test]
    fn test_eval_each_stops_when_callback_breaks() {
        let interp = Interpreter::new();
        let mut seen = Vec::new();
        let result = interp.eval_each("(+ 1 1) (+ 2 2) (def {skipped} 1)", |value| {
            seen.push(value.to_string());
            if seen.len() == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(result, Ok(ControlFlow::Break(())));
        assert_eq!(seen, vec!["2.00", "4.00"]);
        assert_eq!(run(&interp, "skipped"), "Error: Unbound Symbol 'skipped'");
    }

    #[test]
    fn test_print_handler_integration() {
        let interp = Interpreter::with_print_handler(buffer_handler());
        interp.print_handler().println("hello");
        assert_eq!(interp.print_handler().get_output(), "hello\n");
    }
}

//! Arithmetic and bitwise builtins.
//!
//! All share one routine: check every argument is a `Number`, then fold
//! left to right from the first operand. Bitwise, shift and modulo
//! operators convert to `i64` at the point of use; the stored number stays
//! an `f64`.

use lispy_ir::{Builtin, ExprList, Value};

use super::Checked;
use crate::errors;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(super) enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BitAnd,
    BitOr,
    Not,
    BitNot,
    BitXor,
    Pow,
    ShiftRight,
    ShiftLeft,
    Min,
    Max,
}

impl ArithOp {
    fn builtin(self) -> Builtin {
        match self {
            ArithOp::Add => Builtin::Add,
            ArithOp::Sub => Builtin::Sub,
            ArithOp::Mul => Builtin::Mul,
            ArithOp::Div => Builtin::Div,
            ArithOp::Mod => Builtin::Mod,
            ArithOp::BitAnd => Builtin::BitAnd,
            ArithOp::BitOr => Builtin::BitOr,
            ArithOp::Not => Builtin::Not,
            ArithOp::BitNot => Builtin::BitNot,
            ArithOp::BitXor => Builtin::BitXor,
            ArithOp::Pow => Builtin::Pow,
            ArithOp::ShiftRight => Builtin::ShiftRight,
            ArithOp::ShiftLeft => Builtin::ShiftLeft,
            ArithOp::Min => Builtin::Min,
            ArithOp::Max => Builtin::Max,
        }
    }
}

pub(super) fn call(op: ArithOp, args: ExprList) -> Checked<Value> {
    let name = op.builtin().name();

    let mut operands = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Value::Number(x) => operands.push(x),
            other => return Err(errors::wrong_arg_type(name, &other, errors::NUMBER)),
        }
    }

    let mut rest = operands.into_iter();
    let Some(first) = rest.next() else {
        return Err(errors::wrong_arg_count(name, 0, 1));
    };

    if rest.len() == 0 {
        return Ok(Value::Number(unary(op, first)));
    }

    let mut acc = first;
    for y in rest {
        acc = binary(op, acc, y).ok_or_else(errors::division_by_zero)?;
    }
    Ok(Value::Number(acc))
}

/// A single operand: `-` negates, `!` and `~` invert, the rest pass it on.
fn unary(op: ArithOp, x: f64) -> f64 {
    match op {
        ArithOp::Sub => -x,
        ArithOp::Not => bool_to_number(x == 0.0),
        ArithOp::BitNot => !(x as i64) as f64,
        _ => x,
    }
}

/// One fold step. `None` means a zero divisor.
fn binary(op: ArithOp, x: f64, y: f64) -> Option<f64> {
    let value = match op {
        ArithOp::Add => x + y,
        ArithOp::Sub => x - y,
        ArithOp::Mul => x * y,
        ArithOp::Div => {
            if y == 0.0 {
                return None;
            }
            x / y
        }
        ArithOp::Mod => {
            let divisor = y as i64;
            if divisor == 0 {
                return None;
            }
            (x as i64).wrapping_rem(divisor) as f64
        }
        ArithOp::BitAnd => ((x as i64) & (y as i64)) as f64,
        ArithOp::BitOr => ((x as i64) | (y as i64)) as f64,
        ArithOp::BitXor => ((x as i64) ^ (y as i64)) as f64,
        ArithOp::ShiftRight => (x as i64).wrapping_shr(y as i64 as u32) as f64,
        ArithOp::ShiftLeft => (x as i64).wrapping_shl(y as i64 as u32) as f64,
        ArithOp::Pow => power(x, y as i64),
        ArithOp::Min => {
            if x <= y {
                x
            } else {
                y
            }
        }
        ArithOp::Max => {
            if x >= y {
                x
            } else {
                y
            }
        }
        // `!` and `~` only act on a lone operand; extra operands are ignored.
        ArithOp::Not | ArithOp::BitNot => x,
    };
    Some(value)
}

/// `base` raised to an integer power, by repeated squaring.
fn power(base: f64, exp: i64) -> f64 {
    if exp == 0 {
        return 1.0;
    }
    let half = power(base, exp / 2);
    if exp % 2 == 0 {
        half * half
    } else if exp > 0 {
        base * half * half
    } else {
        half * half / base
    }
}

fn bool_to_number(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10), 1024.0);
        assert_eq!(power(2.0, -2), 0.25);
        assert_eq!(power(5.0, 0), 1.0);
        assert_eq!(power(-3.0, 3), -27.0);
    }

    #[test]
    fn test_unary_forms() {
        assert_eq!(unary(ArithOp::Sub, 4.0), -4.0);
        assert_eq!(unary(ArithOp::Not, 0.0), 1.0);
        assert_eq!(unary(ArithOp::Not, 3.0), 0.0);
        assert_eq!(unary(ArithOp::BitNot, 0.0), -1.0);
        assert_eq!(unary(ArithOp::Add, 4.0), 4.0);
    }

    #[test]
    fn test_integer_ops_truncate() {
        assert_eq!(binary(ArithOp::Mod, 7.9, 3.2), Some(1.0));
        assert_eq!(binary(ArithOp::ShiftLeft, 1.0, 4.0), Some(16.0));
        assert_eq!(binary(ArithOp::ShiftRight, 16.0, 2.0), Some(4.0));
        assert_eq!(binary(ArithOp::BitXor, 6.0, 3.0), Some(5.0));
        assert_eq!(binary(ArithOp::Mod, 1.0, 0.5), None);
    }

    #[test]
    fn test_inverting_ops_keep_first_operand_when_folding() {
        assert_eq!(binary(ArithOp::Not, 1.0, 2.0), Some(1.0));
        assert_eq!(binary(ArithOp::BitNot, 5.0, 0.0), Some(5.0));
    }
}

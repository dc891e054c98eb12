//! Binary operator implementations.

use crate::{evaluator::EvalError, parser::BinaryOp};

/// Evaluate a binary operation on two floats.
///
/// Follows IEEE 754 semantics (produces inf/nan rather than failing).
pub(super) fn eval_binary(op: BinaryOp, left: f64, right: f64) -> Result<f64, EvalError> {
    let value = match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => left / right, // Division by zero produces inf
        BinaryOp::Pow => left.powf(right),
        // The `right`-th root of `left`.
        BinaryOp::Root => left.powf(1.0 / right),
        BinaryOp::Assign => return Err(EvalError::BadOperator { op: op.symbol() }),
    };
    Ok(value)
}

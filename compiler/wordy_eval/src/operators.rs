//! Binary operator implementations for the evaluator.
//!
//! The operator set is fixed, so dispatch is a direct `match`.

use wordy_ir::BinaryOp;

use crate::errors::{division_by_zero, EvalResult};

/// Apply `op` to two evaluated operands.
///
/// Division by zero (either sign) is an error rather than an infinity.
pub fn evaluate_binary(op: BinaryOp, left: f64, right: f64) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => {
            if right == 0.0 {
                Err(division_by_zero())
            } else {
                Ok(left / right)
            }
        }
        BinaryOp::Pow => Ok(left.powf(right)),
    }
}

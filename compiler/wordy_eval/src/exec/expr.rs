//! Expression evaluation.
//!
//! Expressions only read the context, so they take it by shared reference.

use wordy_ir::{ensure_sufficient_stack, Expr};

use crate::context::EvalContext;
use crate::errors::EvalResult;
use crate::operators::evaluate_binary;

/// Evaluate `expr` against `context`.
pub fn eval_expr(expr: &Expr, context: &EvalContext) -> EvalResult {
    ensure_sufficient_stack(|| match expr {
        Expr::Constant(value) => Ok(value.get()),
        Expr::Variable { name } => context.lookup(name),
        Expr::Binary { operator, lhs, rhs } => {
            let left = eval_expr(lhs, context)?;
            let right = eval_expr(rhs, context)?;
            evaluate_binary(*operator, left, right)
        }
    })
}

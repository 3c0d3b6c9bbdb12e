//! Expression emission.
//!
//! Every binary expression is parenthesised, so the generated code never
//! depends on the host language's precedence rules.

use wordy_ir::{ensure_sufficient_stack, BinaryOp, Expr};

use crate::emitter::Emitter;

/// Write `expr` as a Java `double` expression.
pub fn emit_expr<E: Emitter + ?Sized>(expr: &Expr, out: &mut E) {
    ensure_sufficient_stack(|| match expr {
        Expr::Constant(value) => out.emit(&java_double_literal(value.get())),
        Expr::Variable { name } => out.emit(name),
        Expr::Binary {
            operator: BinaryOp::Pow,
            lhs,
            rhs,
        } => {
            out.emit("Math.pow(");
            emit_expr(lhs, out);
            out.emit(", ");
            emit_expr(rhs, out);
            out.emit(")");
        }
        Expr::Binary { operator, lhs, rhs } => {
            out.emit("(");
            emit_expr(lhs, out);
            out.emit(" ");
            out.emit(operator.as_symbol());
            out.emit(" ");
            emit_expr(rhs, out);
            out.emit(")");
        }
    });
}

/// Java literal for a `double` value.
pub fn java_double_literal(value: f64) -> String {
    if value.is_nan() {
        "Double.NaN".to_string()
    } else if value == f64::INFINITY {
        "Double.POSITIVE_INFINITY".to_string()
    } else if value == f64::NEG_INFINITY {
        "Double.NEGATIVE_INFINITY".to_string()
    } else {
        // `{:?}` always keeps a fraction or exponent, so Java reads it as a double.
        format!("{value:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::StringEmitter;

    fn render(expr: &Expr) -> String {
        let mut out = StringEmitter::new();
        emit_expr(expr, &mut out);
        out.output()
    }

    #[test]
    fn literals() {
        assert_eq!(java_double_literal(3.0), "3.0");
        assert_eq!(java_double_literal(-0.25), "-0.25");
        assert_eq!(java_double_literal(1e300), "1e300");
        assert_eq!(java_double_literal(f64::NAN), "Double.NaN");
        assert_eq!(
            java_double_literal(f64::NEG_INFINITY),
            "Double.NEGATIVE_INFINITY"
        );
    }

    #[test]
    fn binary_is_parenthesised() {
        let expr = Expr::binary(
            BinaryOp::Mul,
            Expr::binary(BinaryOp::Add, Expr::var("a"), Expr::constant(1.0)),
            Expr::var("b"),
        );
        assert_eq!(render(&expr), "((a + 1.0) * b)");
    }

    #[test]
    fn power_uses_math_pow() {
        let expr = Expr::binary(BinaryOp::Pow, Expr::var("x"), Expr::constant(2.0));
        assert_eq!(render(&expr), "Math.pow(x, 2.0)");
    }
}

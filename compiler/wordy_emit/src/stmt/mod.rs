//! Statement emission.
//!
//! Each statement writes its own lines at the depth it is given and hands
//! nested statements to [`emit_stmt`] again. Braces use Allman style: a block
//! nested under a header sits at the header's depth, any other nested
//! statement one level deeper.

mod reachability;

use wordy_ir::{ensure_sufficient_stack, Stmt};

use crate::config::EmitConfig;
use crate::emitter::Emitter;
use crate::expr::emit_expr;

pub use reachability::can_complete_normally;

/// Header line opening a Wordy loop: a loop whose condition is always true.
pub const LOOP_HEADER: &str = "while (true)";

/// Statement leaving the nearest enclosing loop.
pub const LOOP_EXIT: &str = "break;";

/// Write `stmt` as Java statements starting at `depth`.
pub fn emit_stmt<E: Emitter + ?Sized>(
    stmt: &Stmt,
    out: &mut E,
    config: &EmitConfig,
    depth: usize,
) {
    ensure_sufficient_stack(|| match stmt {
        Stmt::Block { statements } => {
            line(out, config, depth, "{");
            emit_statements(statements, out, config, depth + 1);
            line(out, config, depth, "}");
        }
        Stmt::Assignment { variable, value } => {
            out.emit_indent(config.indent(depth));
            out.emit(variable);
            out.emit(" = ");
            emit_expr(value, out);
            out.emit(";");
            out.emit_newline();
        }
        Stmt::Conditional {
            operator,
            lhs,
            rhs,
            if_true,
            if_false,
        } => {
            out.emit_indent(config.indent(depth));
            out.emit("if (");
            emit_expr(lhs, out);
            out.emit(" ");
            out.emit(operator.as_symbol());
            out.emit(" ");
            emit_expr(rhs, out);
            out.emit(")");
            out.emit_newline();
            if is_empty_block(if_false) {
                emit_nested(if_true, out, config, depth);
            } else {
                // Braces keep an `if` nested in the then-branch from taking our `else`.
                emit_braced(if_true, out, config, depth);
                line(out, config, depth, "else");
                emit_nested(if_false, out, config, depth);
            }
        }
        Stmt::Loop { body } => {
            line(out, config, depth, LOOP_HEADER);
            emit_nested(body, out, config, depth);
        }
        Stmt::LoopExit => line(out, config, depth, LOOP_EXIT),
        Stmt::Print { value } => {
            out.emit_indent(config.indent(depth));
            out.emit("System.out.println(");
            emit_expr(value, out);
            out.emit(");");
            out.emit_newline();
        }
    });
}

/// Emit a statement sequence at `depth`, stopping after the first statement
/// that control cannot fall out of.
pub fn emit_statements<E: Emitter + ?Sized>(
    statements: &[Stmt],
    out: &mut E,
    config: &EmitConfig,
    depth: usize,
) {
    for stmt in statements {
        emit_stmt(stmt, out, config, depth);
        if !can_complete_normally(stmt) {
            break;
        }
    }
}

/// Emit `stmt` under a header at `depth`, adding braces unless it has its own.
fn emit_braced<E: Emitter + ?Sized>(stmt: &Stmt, out: &mut E, config: &EmitConfig, depth: usize) {
    if matches!(stmt, Stmt::Block { .. }) {
        emit_stmt(stmt, out, config, depth);
    } else {
        line(out, config, depth, "{");
        emit_stmt(stmt, out, config, depth + 1);
        line(out, config, depth, "}");
    }
}

/// Emit the statement governed by a header line at `depth`.
fn emit_nested<E: Emitter + ?Sized>(stmt: &Stmt, out: &mut E, config: &EmitConfig, depth: usize) {
    let depth = if matches!(stmt, Stmt::Block { .. }) {
        depth
    } else {
        depth + 1
    };
    emit_stmt(stmt, out, config, depth);
}

fn is_empty_block(stmt: &Stmt) -> bool {
    matches!(stmt, Stmt::Block { statements } if statements.is_empty())
}

fn line<E: Emitter + ?Sized>(out: &mut E, config: &EmitConfig, depth: usize, text: &str) {
    out.emit_indent(config.indent(depth));
    out.emit(text);
    out.emit_newline();
}

#[cfg(test)]
mod tests;

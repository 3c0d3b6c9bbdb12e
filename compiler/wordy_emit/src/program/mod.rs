//! Whole-program emission.
//!
//! Wraps a statement tree in a Java class with a `main` method. Every
//! variable the tree mentions is declared up front as a `double`, so
//! assignments inside loops and branches never need their own declarations.

use std::collections::BTreeSet;

use tracing::debug;
use wordy_ir::{check_loop_exits, walk_expr, walk_stmt, Expr, Stmt, StructureError, Visitor};

use crate::config::EmitConfig;
use crate::emitter::{Emitter, StringEmitter};
use crate::stmt::{emit_statements, emit_stmt};

/// Emit `root` as a complete Java compilation unit.
///
/// The tree is checked first: a loop exit with no enclosing loop has no Java
/// translation.
///
/// # Errors
///
/// Returns [`StructureError::LoopExitOutsideLoop`] for a stray loop exit.
#[tracing::instrument(level = "debug", skip_all, fields(class = %config.class_name))]
pub fn emit_program(root: &Stmt, config: &EmitConfig) -> Result<String, StructureError> {
    check_loop_exits(root)?;

    let variables = collect_variables(root);
    debug!(variables = variables.len(), "emitting program");

    let mut out = StringEmitter::new();
    out.emit("public class ");
    out.emit(&config.class_name);
    out.emit(" {");
    out.emit_newline();
    out.emit_indent(config.indent(1));
    out.emit("public static void main(String[] ");
    out.emit(&main_parameter(&variables));
    out.emit(") {");
    out.emit_newline();

    for name in &variables {
        out.emit_indent(config.indent(2));
        out.emit("double ");
        out.emit(name);
        out.emit(" = 0.0;");
        out.emit_newline();
    }

    match root {
        Stmt::Block { statements } => emit_statements(statements, &mut out, config, 2),
        _ => emit_stmt(root, &mut out, config, 2),
    }

    out.emit_indent(config.indent(1));
    out.emit("}");
    out.emit_newline();
    out.emit("}");
    out.emit_newline();
    Ok(out.output())
}

/// Names assigned or read anywhere in `root`, sorted.
pub fn collect_variables(root: &Stmt) -> BTreeSet<&str> {
    let mut collector = VariableCollector::default();
    collector.visit_stmt(root);
    collector.names
}

/// Name for `main`'s parameter that no program variable uses.
fn main_parameter(variables: &BTreeSet<&str>) -> String {
    let mut name = String::from("args");
    while variables.contains(name.as_str()) {
        name.push('_');
    }
    name
}

#[derive(Default)]
struct VariableCollector<'ast> {
    names: BTreeSet<&'ast str>,
}

impl<'ast> Visitor<'ast> for VariableCollector<'ast> {
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        if let Stmt::Assignment { variable, .. } = stmt {
            self.names.insert(variable.as_str());
        }
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        if let Expr::Variable { name } = expr {
            self.names.insert(name.as_str());
        }
        walk_expr(self, expr);
    }
}

//! Wordy Emit - Java source generation for Wordy trees.
//!
//! Each node kind has one emission rule, and a node emits its children by
//! delegating to their own rules. A loop becomes `while (true)` followed by
//! its body; a loop exit becomes `break;`. Because Wordy loops are the only
//! construct a loop exit can leave, `break` always targets the right loop.
//!
//! Emission is deterministic: the same tree and configuration always produce
//! the same text.

mod config;
mod emitter;
mod expr;
mod program;
mod stmt;

pub use config::{EmitConfig, DEFAULT_CLASS_NAME, INDENT_WIDTH};
pub use emitter::{Emitter, StringEmitter};
pub use expr::{emit_expr, java_double_literal};
pub use program::{collect_variables, emit_program};
pub use stmt::{can_complete_normally, emit_statements, emit_stmt, LOOP_EXIT, LOOP_HEADER};

/// Emit a single statement at depth zero and return the text.
///
/// No structure check is made; a stray loop exit is emitted as `break;`.
pub fn emit_to_string(stmt: &wordy_ir::Stmt, config: &EmitConfig) -> String {
    let mut out = StringEmitter::new();
    emit_stmt(stmt, &mut out, config, 0);
    out.output()
}

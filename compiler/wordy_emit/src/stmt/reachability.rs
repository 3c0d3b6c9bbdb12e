//! Host-language reachability.
//!
//! Java rejects statements it can prove unreachable: anything after `break;`
//! in a block, after a `while (true)` with no `break` of its own, or after an
//! `if`/`else` whose branches both leave. Those statements can never run
//! under the interpreter either, so block emission stops at the first
//! statement that cannot complete normally.

use wordy_ir::{ensure_sufficient_stack, Stmt};

/// Whether control can fall through `stmt` to the next statement, by Java's
/// rules for the code this crate emits.
pub fn can_complete_normally(stmt: &Stmt) -> bool {
    ensure_sufficient_stack(|| match stmt {
        Stmt::Block { statements } => statements.iter().all(can_complete_normally),
        Stmt::Assignment { .. } | Stmt::Print { .. } => true,
        Stmt::Conditional {
            if_true, if_false, ..
        } => can_complete_normally(if_true) || can_complete_normally(if_false),
        Stmt::Loop { body } => exits_loop(body),
        Stmt::LoopExit => false,
    })
}

/// Whether `stmt` holds a reachable exit from the loop directly around it.
///
/// Exits inside a nested loop belong to that loop.
fn exits_loop(stmt: &Stmt) -> bool {
    ensure_sufficient_stack(|| match stmt {
        Stmt::Block { statements } => {
            for stmt in statements {
                if exits_loop(stmt) {
                    return true;
                }
                if !can_complete_normally(stmt) {
                    return false;
                }
            }
            false
        }
        Stmt::Conditional {
            if_true, if_false, ..
        } => exits_loop(if_true) || exits_loop(if_false),
        Stmt::LoopExit => true,
        Stmt::Loop { .. } | Stmt::Assignment { .. } | Stmt::Print { .. } => false,
    })
}

//! Statement outcomes and expression evaluation.
//!
//! Statements report how they finished through [`ExecOutcome`] instead of
//! unwinding. Every statement that runs children forwards a `LoopExit` from
//! them untouched; `Loop` is the only kind that consumes it.

pub mod expr;

use crate::errors::EvalError;

/// How a statement finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExecOutcome {
    /// Ran to the end; continue with the next statement.
    Completed,
    /// A `LoopExit` ran; skip everything up to the nearest enclosing loop.
    LoopExit,
}

impl ExecOutcome {
    #[inline]
    pub fn is_loop_exit(self) -> bool {
        matches!(self, ExecOutcome::LoopExit)
    }
}

/// Result of executing a statement.
pub type ExecResult = Result<ExecOutcome, EvalError>;

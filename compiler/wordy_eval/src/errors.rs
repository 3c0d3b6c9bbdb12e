//! Runtime errors and their constructors.
//!
//! The loop-exit outcome is deliberately absent here: leaving a loop is
//! ordinary control flow carried by [`ExecOutcome`](crate::ExecOutcome), not a
//! failure. It only becomes an error when it escapes the whole program.

/// Result of evaluating an expression.
pub type EvalResult = Result<f64, EvalError>;

/// Evaluation error.
///
/// Any of these terminates the run. Loops never intercept them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },

    #[error("division by zero")]
    DivisionByZero,

    /// A `LoopExit` ran with no loop on the execution path.
    #[error("loop exit outside of any loop")]
    LoopExitOutsideLoop,

    /// The configured statement budget ran out before the program finished.
    #[error("step budget exhausted (limit: {limit})")]
    StepBudgetExhausted { limit: u64 },
}

pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::UndefinedVariable {
        name: name.to_string(),
    }
}

pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

pub fn loop_exit_outside_loop() -> EvalError {
    EvalError::LoopExitOutsideLoop
}

pub fn step_budget_exhausted(limit: u64) -> EvalError {
    EvalError::StepBudgetExhausted { limit }
}

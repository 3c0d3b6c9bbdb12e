//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: output to stdout, no step limit (a loop may run forever).
#[derive(Default)]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    step_limit: Option<u64>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set where `Print` output goes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Fail with `StepBudgetExhausted` once more than `limit` statements have
    /// executed.
    #[must_use]
    pub fn step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            step_limit: self.step_limit,
            steps: 0,
        }
    }
}

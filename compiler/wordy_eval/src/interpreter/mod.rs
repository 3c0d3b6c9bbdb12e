//! Tree-walking statement execution.
//!
//! [`Interpreter::exec`] dispatches over every statement kind with an
//! exhaustive `match`. The loop-exit outcome travels back up through return
//! values: blocks stop at the first child that reports it, conditionals pass
//! on whatever their branch reported, and the nearest `Loop` consumes it and
//! completes normally. Errors use `?` and pass every loop untouched.

mod builder;

use wordy_ir::{ensure_sufficient_stack, Stmt};

use crate::context::EvalContext;
use crate::errors::{loop_exit_outside_loop, step_budget_exhausted, EvalError};
use crate::exec::expr::eval_expr;
use crate::exec::{ExecOutcome, ExecResult};
use crate::print_handler::{format_number, SharedPrintHandler};

pub use builder::InterpreterBuilder;

/// Executes Wordy statements against an [`EvalContext`].
///
/// One interpreter may serve several runs; the step counter keeps counting
/// across them until [`reset_steps`](Self::reset_steps) is called.
pub struct Interpreter {
    print_handler: SharedPrintHandler,
    /// Maximum number of statements to execute, if bounded.
    step_limit: Option<u64>,
    /// Statements executed so far.
    steps: u64,
}

impl Default for Interpreter {
    fn default() -> Self {
        InterpreterBuilder::new().build()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Number of statements executed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn reset_steps(&mut self) {
        self.steps = 0;
    }

    /// Run `program` as a whole program.
    ///
    /// A loop-exit outcome that reaches this level had no loop to stop and is
    /// reported as [`EvalError::LoopExitOutsideLoop`].
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, program: &Stmt, context: &mut EvalContext) -> Result<(), EvalError> {
        let outcome = self.exec(program, context);
        tracing::debug!(steps = self.steps, ok = outcome.is_ok(), "run finished");
        match outcome? {
            ExecOutcome::Completed => Ok(()),
            ExecOutcome::LoopExit => {
                tracing::warn!("loop exit escaped to the top level");
                Err(loop_exit_outside_loop())
            }
        }
    }

    /// Execute one statement.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = stmt.kind_name()))]
    pub fn exec(&mut self, stmt: &Stmt, context: &mut EvalContext) -> ExecResult {
        ensure_sufficient_stack(|| {
            self.count_step()?;
            match stmt {
                Stmt::Block { statements } => self.exec_block(statements, context),
                Stmt::Assignment { variable, value } => {
                    let value = eval_expr(value, context)?;
                    context.set(variable.as_str(), value);
                    Ok(ExecOutcome::Completed)
                }
                Stmt::Conditional {
                    operator,
                    lhs,
                    rhs,
                    if_true,
                    if_false,
                } => {
                    let left = eval_expr(lhs, context)?;
                    let right = eval_expr(rhs, context)?;
                    if operator.compare(left, right) {
                        self.exec(if_true, context)
                    } else {
                        self.exec(if_false, context)
                    }
                }
                Stmt::Loop { body } => self.exec_loop(body, context),
                Stmt::LoopExit => Ok(ExecOutcome::LoopExit),
                Stmt::Print { value } => {
                    let value = eval_expr(value, context)?;
                    self.print_handler.println(&format_number(value));
                    Ok(ExecOutcome::Completed)
                }
            }
        })
    }

    fn exec_block(&mut self, statements: &[Stmt], context: &mut EvalContext) -> ExecResult {
        for stmt in statements {
            if self.exec(stmt, context)?.is_loop_exit() {
                return Ok(ExecOutcome::LoopExit);
            }
        }
        Ok(ExecOutcome::Completed)
    }

    /// Run `body` until it reports a loop exit.
    ///
    /// The exit is consumed here, so the loop itself always completes
    /// normally. With no exit and no error this never returns.
    fn exec_loop(&mut self, body: &Stmt, context: &mut EvalContext) -> ExecResult {
        let mut iterations: u64 = 0;
        loop {
            iterations = iterations.saturating_add(1);
            match self.exec(body, context)? {
                ExecOutcome::Completed => {}
                ExecOutcome::LoopExit => {
                    tracing::debug!(iterations, "loop exited");
                    return Ok(ExecOutcome::Completed);
                }
            }
        }
    }

    fn count_step(&mut self) -> Result<(), EvalError> {
        self.steps = self.steps.saturating_add(1);
        match self.step_limit {
            Some(limit) if self.steps > limit => {
                tracing::warn!(limit, "step budget exhausted");
                Err(step_budget_exhausted(limit))
            }
            _ => Ok(()),
        }
    }
}

//! Wordy Eval - tree-walking interpreter for Wordy programs.
//!
//! # Architecture
//!
//! - `EvalContext`: the variable store for one run, owned by the caller and
//!   lent to the interpreter by `&mut`
//! - `Interpreter::exec`: exhaustive dispatch over statement kinds, returning
//!   an `ExecOutcome` (`Completed` or `LoopExit`)
//! - `eval_expr` / `evaluate_binary`: expression evaluation
//! - `PrintHandlerImpl`: where `Print` output goes
//!
//! Loop exit is control flow, not an error: it is a return value that each
//! statement forwards until the nearest `Loop` consumes it. Runtime failures
//! are `EvalError`s and propagate with `?` through every loop.

mod context;
pub mod errors;
pub mod exec;
pub mod interpreter;
mod operators;
mod print_handler;

pub use context::EvalContext;
pub use errors::{EvalError, EvalResult};
pub use exec::expr::eval_expr;
pub use exec::{ExecOutcome, ExecResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, format_number, silent_handler, stdout_handler, BufferPrintHandler,
    PrintHandlerImpl, SharedPrintHandler,
};

//! Wordy - run or compile Wordy statement trees.
//!
//! Both back ends take the same tree:
//! - [`run`] executes it with the tree-walking interpreter and returns the
//!   final variable bindings
//! - [`compile`] translates it into a Java program
//!
//! Set `RUST_LOG` and call [`init_tracing`] to see what the interpreter and
//! emitter are doing.

use std::sync::Once;

use tracing::debug;

pub use wordy_emit::{emit_program, EmitConfig};
pub use wordy_eval::{
    buffer_handler, silent_handler, stdout_handler, EvalContext, EvalError, ExecOutcome,
    Interpreter, InterpreterBuilder, SharedPrintHandler,
};
pub use wordy_ir::{
    check_loop_exits, BinaryOp, ComparisonOp, Expr, NodePath, Stmt, StructureError,
};

/// Anything that can go wrong running or compiling a tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WordyError {
    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Structure(#[from] StructureError),
}

/// Run `program` from an empty context, printing to stdout.
pub fn run(program: &Stmt) -> Result<EvalContext, WordyError> {
    run_with(program, EvalContext::new(), &mut Interpreter::new())
}

/// Run `program` from `context` on a caller-configured interpreter.
pub fn run_with(
    program: &Stmt,
    mut context: EvalContext,
    interpreter: &mut Interpreter,
) -> Result<EvalContext, WordyError> {
    interpreter.run(program, &mut context)?;
    debug!(
        steps = interpreter.steps(),
        bindings = ?context.sorted(),
        "program finished"
    );
    Ok(context)
}

/// Like [`run`], but reject a stray loop exit before anything executes.
///
/// [`run`] only notices a stray exit when it is reached; this also catches
/// one on a branch that never runs.
pub fn run_checked(program: &Stmt) -> Result<EvalContext, WordyError> {
    check_loop_exits(program)?;
    run(program)
}

/// Translate `program` into a Java class with the default configuration.
pub fn compile(program: &Stmt) -> Result<String, WordyError> {
    compile_with(program, &EmitConfig::default())
}

pub fn compile_with(program: &Stmt, config: &EmitConfig) -> Result<String, WordyError> {
    Ok(emit_program(program, config)?)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this early to enable tracing. Uses `RUST_LOG` env var for filtering:
/// - `RUST_LOG=wordy_eval=debug` - loop and run summaries
/// - `RUST_LOG=wordy_eval=trace` - every executed statement
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let layer = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true);
            // Another subscriber may already be installed by the embedder.
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init();
        }
    });
}

//! Stack growth for recursive passes over the tree.
//!
//! Interpretation, emission, dumping, and checking all recurse once per
//! nesting level. A parser is free to hand us a tree nested thousands of
//! levels deep, so each recursive step runs through
//! [`ensure_sufficient_stack`].

/// Grow the stack when less than this remains.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

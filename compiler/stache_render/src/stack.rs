//! Stack growth for deeply nested templates.
//!
//! Every section body, partial, and lambda re-render is one more level of
//! native recursion. [`ensure_sufficient_stack`] wraps each level so a
//! template nested thousands deep moves onto a fresh stack segment rather
//! than overflowing.

/// Grow once less than this much stack is left.
#[cfg(not(target_arch = "wasm32"))]
const MIN_REMAINING: usize = 128 * 1024;

/// Size of each new stack segment.
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT: usize = 2 * 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(MIN_REMAINING, SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

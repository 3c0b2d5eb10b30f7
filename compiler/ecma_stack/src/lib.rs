//! Stack safety for deep tree walks.
//!
//! Lowered programs can nest arbitrarily deep (long `a + b + c + ...` chains,
//! machine-generated nested closures), and every pass over them recurses once
//! per node. Wrapping the per-node step in [`ensure_sufficient_stack`] grows
//! the stack on demand instead of overflowing.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: direct call (the engine owns the stack).

/// Grow the stack when less than this much remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn visit_node(&mut self, id: NodeId, arena: &NodeArena) -> Result<(), InternalError> {
///     ensure_sufficient_stack(|| self.visit_node_inner(id, arena))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: no growth.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

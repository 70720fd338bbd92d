//! Evaluation settings shared by every node visit.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Knobs for a single evaluation.
///
/// The default context places no bound on tree depth, never traces, and
/// starts uninterrupted; evaluation then fails only on arithmetic errors.
#[derive(Debug, Clone, Default)]
pub struct EvalContext {
    /// Optional cap on how deeply nodes may nest, counting the root as 1.
    ///
    /// `None` lets any well-formed tree evaluate. With `Some(n)`, reaching
    /// a node below depth `n` stops evaluation with
    /// [`EvalError::DepthLimitExceeded`](crate::EvalError::DepthLimitExceeded),
    /// which is useful for rejecting untrusted input early.
    pub max_depth: Option<usize>,

    /// Cancellation flag, checked before every node. Clones share it.
    pub interrupt: Arc<AtomicBool>,

    /// Emit a `tracing` DEBUG event for every binary operation.
    pub trace: bool,
}

impl EvalContext {
    /// Unbounded, untraced context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that rejects trees nested deeper than `max_depth`.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Default::default()
        }
    }

    /// Turn per-operation tracing on or off.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Whether some holder of this context asked evaluation to stop.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Ask any evaluation using this context (or a clone) to stop.
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Clear a previous interrupt request.
    pub fn reset_interrupt(&self) {
        self.interrupt.store(false, Ordering::Relaxed);
    }
}

//! Error types for arbor evaluation

use thiserror::Error;

use crate::node::OpKind;

/// Errors raised while evaluating an expression tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The right operand of a division evaluated to zero
    #[error("attempt to divide {dividend} by zero")]
    DivisionByZero {
        /// Value of the left operand
        dividend: i64,
    },

    /// Checked arithmetic overflowed `i64`
    #[error("integer overflow evaluating {left} {} {right}", .op.symbol())]
    IntegerOverflow {
        /// Operation that overflowed
        op: OpKind,
        /// Left operand
        left: i64,
        /// Right operand
        right: i64,
    },

    /// The tree is nested deeper than the context allows
    #[error("expression nested deeper than {limit} levels")]
    DepthLimitExceeded {
        /// Configured maximum depth
        limit: usize,
    },

    /// Evaluation was interrupted through the context flag
    #[error("evaluation interrupted")]
    Interrupted,
}

/// Result type alias for arbor evaluation
pub type Result<T> = std::result::Result<T, EvalError>;

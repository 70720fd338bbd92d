//! Binary operation evaluation

use crate::error::Result;
use crate::node::OpKind;
use crate::{EvalContext, EvalError};

/// Combine two already-evaluated operands, logging the step when tracing.
pub(crate) fn eval_binary(
    op: OpKind,
    left: i64,
    right: i64,
    ctx: &EvalContext,
) -> Result<i64> {
    let result = apply(op, left, right);
    if ctx.trace {
        match &result {
            Ok(value) => tracing::debug!(%op, left, right, result = *value, "binary operation"),
            Err(err) => tracing::debug!(%op, left, right, error = %err, "binary operation failed"),
        }
    }
    result
}

/// Apply `op` to two integers with checked arithmetic.
///
/// Division truncates toward zero. A zero divisor is reported as
/// [`EvalError::DivisionByZero`] before any overflow check.
pub fn apply(op: OpKind, left: i64, right: i64) -> Result<i64> {
    let checked = match op {
        OpKind::Add => left.checked_add(right),
        OpKind::Subtract => left.checked_sub(right),
        OpKind::Multiply => left.checked_mul(right),
        OpKind::Divide => {
            if right == 0 {
                return Err(EvalError::DivisionByZero { dividend: left });
            }
            left.checked_div(right)
        }
    };
    checked.ok_or(EvalError::IntegerOverflow { op, left, right })
}

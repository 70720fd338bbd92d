//! Expression evaluation
//!
//! Trees are walked with an explicit work stack rather than native
//! recursion, so nesting depth is bounded only by memory unless the
//! context sets a limit.

pub mod binary;

use crate::error::Result;
use crate::node::{Node, OpKind, OperationNode};
use crate::{EvalContext, EvalError};

/// Trait for evaluating tree nodes to integers.
///
/// This is the core abstraction for the evaluator. Both node variants
/// implement it, so a subtree can be evaluated on its own.
pub trait Evaluate {
    /// Evaluate this node with the given context.
    fn eval(&self, ctx: &EvalContext) -> Result<i64>;
}

impl Evaluate for Node {
    fn eval(&self, ctx: &EvalContext) -> Result<i64> {
        run(vec![Task::Visit(self, 1)], ctx)
    }
}

impl Evaluate for OperationNode {
    fn eval(&self, ctx: &EvalContext) -> Result<i64> {
        enter(ctx, 1)?;
        run(schedule(self, 1), ctx)
    }
}

/// Pending work on the evaluation stack.
enum Task<'a> {
    /// Evaluate a node found at the given depth
    Visit(&'a Node, usize),
    /// Pop two operands and combine them
    Combine(OpKind),
}

/// Tasks for an operation node, ordered so the left child is popped first.
fn schedule(op: &OperationNode, depth: usize) -> Vec<Task<'_>> {
    vec![
        Task::Combine(op.op),
        Task::Visit(&op.right, depth + 1),
        Task::Visit(&op.left, depth + 1),
    ]
}

/// Guard run before each node: honours interruption and the depth limit.
fn enter(ctx: &EvalContext, depth: usize) -> Result<()> {
    if ctx.is_interrupted() {
        return Err(EvalError::Interrupted);
    }
    match ctx.max_depth {
        Some(limit) if depth > limit => Err(EvalError::DepthLimitExceeded { limit }),
        _ => Ok(()),
    }
}

// Post-order walk: the whole left subtree is reduced before the right one
// is visited, and the first error aborts the walk.
fn run(mut tasks: Vec<Task<'_>>, ctx: &EvalContext) -> Result<i64> {
    let mut operands: Vec<i64> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit(node, depth) => {
                enter(ctx, depth)?;
                match node {
                    Node::Leaf(value) => operands.push(*value),
                    Node::Operation(op) => tasks.extend(schedule(op, depth)),
                }
            }
            Task::Combine(op) => {
                let right = pop_operand(&mut operands);
                let left = pop_operand(&mut operands);
                operands.push(binary::eval_binary(op, left, right, ctx)?);
            }
        }
    }

    Ok(pop_operand(&mut operands))
}

fn pop_operand(operands: &mut Vec<i64>) -> i64 {
    match operands.pop() {
        Some(value) => value,
        // Every Combine is scheduled after the two Visits that feed it.
        None => unreachable!("operand stack underflow"),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate a tree with the default context.
pub fn evaluate(node: &Node) -> Result<i64> {
    node.eval(&EvalContext::default())
}

/// Evaluate a tree with an explicit context.
pub fn evaluate_with(node: &Node, ctx: &EvalContext) -> Result<i64> {
    node.eval(ctx)
}

//! # Arbor
//!
//! Composite arithmetic expression trees and a recursive integer evaluator.
//!
//! A tree is built from two kinds of node: a leaf holding one `i64`, and an
//! operation node that owns a left and right subtree and combines them with
//! one of `+`, `-`, `*` or `/`. Evaluation walks the tree depth-first, left
//! before right, and reports division by zero and overflow as errors rather
//! than panicking.
//!
//! ## Architecture
//!
//! - **Node**: the tree data model, with builders, `Display` and serde support
//! - **Eval**: the `Evaluate` trait and checked binary arithmetic
//! - **Frontends**: infix (Rust syntax, via `syn`) and JSON parsers
//!
//! ```
//! use arbor::{evaluate, Node};
//!
//! let tree = Node::divide(
//!     Node::multiply(
//!         Node::add(Node::leaf(2), Node::leaf(3)),
//!         Node::subtract(Node::leaf(77), Node::leaf(55)),
//!     ),
//!     Node::leaf(2),
//! );
//! assert_eq!(evaluate(&tree).unwrap(), 55);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod eval;
pub mod frontend;
pub mod frontends;
pub mod node;

// Re-export main types
pub use context::EvalContext;
pub use error::{EvalError, Result};
pub use eval::{evaluate, evaluate_with, Evaluate};
pub use frontend::{Frontend, ParseError, SourceLocation};
pub use node::{Node, OpKind, OperationNode};

/// Arbor version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

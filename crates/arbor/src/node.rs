//! Expression tree data model
//!
//! A tree is either a [`Node::Leaf`] holding one integer or a
//! [`Node::Operation`] that exclusively owns a left and right child.
//! Trees are immutable once built; evaluation only borrows them.

use std::fmt;

use proc_macro2::{Literal, TokenStream};
use quote::{quote, ToTokens};
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// Operation Kinds
// ═══════════════════════════════════════════════════════════════════════

/// The four binary operations an [`OperationNode`] can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    /// `left + right`
    Add,
    /// `left - right`
    Subtract,
    /// `left * right`
    Multiply,
    /// `left / right`, truncating toward zero
    Divide,
}

impl OpKind {
    /// All operation kinds, in declaration order.
    pub const ALL: [OpKind; 4] = [
        OpKind::Add,
        OpKind::Subtract,
        OpKind::Multiply,
        OpKind::Divide,
    ];

    /// Infix symbol for this operation.
    pub fn symbol(self) -> &'static str {
        match self {
            OpKind::Add => "+",
            OpKind::Subtract => "-",
            OpKind::Multiply => "*",
            OpKind::Divide => "/",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Subtract => "subtract",
            OpKind::Multiply => "multiply",
            OpKind::Divide => "divide",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Nodes
// ═══════════════════════════════════════════════════════════════════════

/// A node in an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// A single integer value
    Leaf(i64),
    /// A binary operation over two owned subtrees
    Operation(OperationNode),
}

/// An internal node combining two children with an [`OpKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationNode {
    /// Operation applied to the evaluated children
    pub op: OpKind,
    /// Left operand
    pub left: Box<Node>,
    /// Right operand
    pub right: Box<Node>,
}

impl OperationNode {
    /// Create an operation node from two children.
    pub fn new(op: OpKind, left: Node, right: Node) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Node {
    /// Create a leaf.
    pub fn leaf(value: i64) -> Self {
        Node::Leaf(value)
    }

    /// Create an operation node.
    pub fn operation(op: OpKind, left: Node, right: Node) -> Self {
        Node::Operation(OperationNode::new(op, left, right))
    }

    /// `left + right`
    pub fn add(left: Node, right: Node) -> Self {
        Self::operation(OpKind::Add, left, right)
    }

    /// `left - right`
    pub fn subtract(left: Node, right: Node) -> Self {
        Self::operation(OpKind::Subtract, left, right)
    }

    /// `left * right`
    pub fn multiply(left: Node, right: Node) -> Self {
        Self::operation(OpKind::Multiply, left, right)
    }

    /// `left / right`
    pub fn divide(left: Node, right: Node) -> Self {
        Self::operation(OpKind::Divide, left, right)
    }

    /// Fold `values` into a left-leaning chain: `op(op(v0, v1), v2)...`
    ///
    /// Returns `None` for an empty input and a leaf for a single value.
    pub fn left_skewed(op: OpKind, values: impl IntoIterator<Item = i64>) -> Option<Node> {
        let mut values = values.into_iter();
        let first = Node::Leaf(values.next()?);
        Some(values.fold(first, |acc, v| Node::operation(op, acc, Node::Leaf(v))))
    }

    /// Fold `values` into a right-leaning chain: `op(v0, op(v1, v2))...`
    ///
    /// Returns `None` for an empty input and a leaf for a single value.
    pub fn right_skewed(op: OpKind, values: impl IntoIterator<Item = i64>) -> Option<Node> {
        let values: Vec<i64> = values.into_iter().collect();
        let mut rev = values.into_iter().rev();
        let last = Node::Leaf(rev.next()?);
        Some(rev.fold(last, |acc, v| Node::operation(op, Node::Leaf(v), acc)))
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Height of the tree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Operation(op) => 1 + op.left.depth().max(op.right.depth()),
        }
    }

    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Operation(op) => op.left.leaf_count() + op.right.leaf_count(),
        }
    }

    /// Number of operation nodes in the tree.
    pub fn operation_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Operation(op) => 1 + op.left.operation_count() + op.right.operation_count(),
        }
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Leaf(value)
    }
}

impl From<OperationNode> for Node {
    fn from(op: OperationNode) -> Self {
        Node::Operation(op)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Display
// ═══════════════════════════════════════════════════════════════════════

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(v) if *v < 0 => write!(f, "({})", v),
            Node::Leaf(v) => write!(f, "{}", v),
            Node::Operation(op) => write!(f, "{}", op),
        }
    }
}

impl fmt::Display for OperationNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.op, self.right)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Token Emission
// ═══════════════════════════════════════════════════════════════════════

impl ToTokens for Node {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Node::Leaf(i64::MIN) => tokens.extend(quote!(i64::MIN)),
            Node::Leaf(v) if *v < 0 => {
                let lit = Literal::i64_suffixed(-*v);
                tokens.extend(quote!((-#lit)));
            }
            Node::Leaf(v) => Literal::i64_suffixed(*v).to_tokens(tokens),
            Node::Operation(op) => op.to_tokens(tokens),
        }
    }
}

impl ToTokens for OperationNode {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let left = &self.left;
        let right = &self.right;
        let op = match self.op {
            OpKind::Add => quote!(+),
            OpKind::Subtract => quote!(-),
            OpKind::Multiply => quote!(*),
            OpKind::Divide => quote!(/),
        };
        tokens.extend(quote!((#left #op #right)));
    }
}

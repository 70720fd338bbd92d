//! Infix frontend
//!
//! Parses integer arithmetic written in Rust expression syntax using `syn`,
//! so precedence and associativity are exactly Rust's: `*` and `/` bind
//! tighter than `+` and `-`, and all four associate to the left.

use proc_macro2::Span;
use quote::ToTokens;
use syn::spanned::Spanned;

use crate::frontend::{Frontend, ParseError, SourceLocation};
use crate::{EvalError, Node, OpKind};

/// Rust-syntax infix frontend.
///
/// # Example
///
/// ```
/// use arbor::frontends::InfixFrontend;
/// use arbor::{evaluate, Frontend};
///
/// let tree = InfixFrontend::new().parse("(2 + 3) * (77 - 55) / 2").unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), 55);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InfixFrontend;

impl InfixFrontend {
    /// Create a new infix frontend.
    pub fn new() -> Self {
        Self
    }
}

impl Frontend for InfixFrontend {
    fn parse(&self, source: &str) -> Result<Node, ParseError> {
        let expr: syn::Expr = syn::parse_str(source)
            .map_err(|e| error_at(format!("syntax error: {}", e), e.span()))?;
        lower(&expr)
    }

    fn format_error(&self, error: &EvalError) -> String {
        // Mirror rustc's wording for arithmetic panics
        match error {
            EvalError::DivisionByZero { .. } => "error: attempt to divide by zero".to_string(),
            EvalError::IntegerOverflow { op, .. } => {
                format!("error: attempt to {} with overflow", op.name())
            }
            _ => format!("error: {}", error),
        }
    }

    fn name(&self) -> &str {
        "infix"
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Lowering syn::Expr to Node
// ═══════════════════════════════════════════════════════════════════════

fn lower(expr: &syn::Expr) -> Result<Node, ParseError> {
    match expr {
        syn::Expr::Lit(lit) => lower_lit(&lit.lit),
        syn::Expr::Path(path) => lower_path(path),
        syn::Expr::Paren(paren) => lower(&paren.expr),
        syn::Expr::Group(group) => lower(&group.expr),
        syn::Expr::Unary(unary) => match unary.op {
            syn::UnOp::Neg(_) => lower_neg(&unary.expr),
            _ => Err(error_at(
                format!(
                    "unsupported unary operator `{}`",
                    unary.op.to_token_stream()
                ),
                unary.op.span(),
            )),
        },
        syn::Expr::Binary(binary) => {
            let op = lower_op(&binary.op)?;
            let left = lower(&binary.left)?;
            let right = lower(&binary.right)?;
            Ok(Node::operation(op, left, right))
        }
        other => Err(error_at(
            format!("unsupported expression: {}", expr_kind_name(other)),
            other.span(),
        )),
    }
}

fn lower_op(op: &syn::BinOp) -> Result<OpKind, ParseError> {
    match op {
        syn::BinOp::Add(_) => Ok(OpKind::Add),
        syn::BinOp::Sub(_) => Ok(OpKind::Subtract),
        syn::BinOp::Mul(_) => Ok(OpKind::Multiply),
        syn::BinOp::Div(_) => Ok(OpKind::Divide),
        other => Err(error_at(
            format!("unsupported binary operator `{}`", other.to_token_stream()),
            other.span(),
        )),
    }
}

fn lower_lit(lit: &syn::Lit) -> Result<Node, ParseError> {
    let int = int_literal(lit)?;
    int.base10_parse::<i64>()
        .map(Node::Leaf)
        .map_err(|e| error_at(format!("invalid integer literal: {}", e), int.span()))
}

/// A negated literal folds into a negative leaf; any other operand becomes `0 - x`.
fn lower_neg(operand: &syn::Expr) -> Result<Node, ParseError> {
    if let syn::Expr::Lit(lit) = operand {
        let int = int_literal(&lit.lit)?;
        // Parse wide so that `-9223372036854775808` reaches i64::MIN.
        let magnitude = int
            .base10_parse::<i128>()
            .map_err(|e| error_at(format!("invalid integer literal: {}", e), int.span()))?;
        return i64::try_from(-magnitude).map(Node::Leaf).map_err(|_| {
            error_at(
                format!("integer literal -{} does not fit in i64", int.base10_digits()),
                int.span(),
            )
        });
    }
    Ok(Node::subtract(Node::Leaf(0), lower(operand)?))
}

fn int_literal(lit: &syn::Lit) -> Result<&syn::LitInt, ParseError> {
    match lit {
        syn::Lit::Int(int) if matches!(int.suffix(), "" | "i64") => Ok(int),
        syn::Lit::Int(int) => Err(error_at(
            format!("unsupported integer suffix `{}`, expected i64", int.suffix()),
            int.span(),
        )),
        other => Err(error_at("expected an integer literal", other.span())),
    }
}

fn lower_path(path: &syn::ExprPath) -> Result<Node, ParseError> {
    let name = path
        .path
        .segments
        .iter()
        .map(|seg| seg.ident.to_string())
        .collect::<Vec<_>>()
        .join("::");
    match name.as_str() {
        "i64::MIN" if path.qself.is_none() => Ok(Node::Leaf(i64::MIN)),
        "i64::MAX" if path.qself.is_none() => Ok(Node::Leaf(i64::MAX)),
        _ => Err(error_at(format!("unknown name `{}`", name), path.span())),
    }
}

fn error_at(message: impl Into<String>, span: Span) -> ParseError {
    let start = span.start();
    ParseError::new(message).with_location(SourceLocation::new(start.line, start.column + 1))
}

/// Get a human-readable name for an expression kind.
fn expr_kind_name(expr: &syn::Expr) -> &'static str {
    match expr {
        syn::Expr::Array(_) => "array",
        syn::Expr::Assign(_) => "assignment",
        syn::Expr::Block(_) => "block",
        syn::Expr::Call(_) => "function call",
        syn::Expr::Cast(_) => "cast",
        syn::Expr::Closure(_) => "closure",
        syn::Expr::Field(_) => "field access",
        syn::Expr::If(_) => "if",
        syn::Expr::Index(_) => "index",
        syn::Expr::Macro(_) => "macro invocation",
        syn::Expr::Match(_) => "match",
        syn::Expr::MethodCall(_) => "method call",
        syn::Expr::Range(_) => "range",
        syn::Expr::Reference(_) => "reference",
        syn::Expr::Tuple(_) => "tuple",
        _ => "unknown",
    }
}

//! Frontend trait for building expression trees from text
//!
//! A frontend turns source text into a [`Node`] tree which the evaluator
//! core then reduces to an integer:
//!
//! ```text
//! Source Text → [Frontend] → Node tree → [Evaluator] → i64
//! ```
//!
//! Frontends are responsible for parsing and for presenting evaluation
//! errors in their own style. The core never sees source text.

use crate::{EvalError, Node};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════
// ERROR TYPES
// ═══════════════════════════════════════════════════════════════════════

/// Error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,

    /// Optional source location
    pub location: Option<SourceLocation>,
}

impl ParseError {
    /// Create a new parse error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    /// Add location information to the error.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error: {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}:{}", loc.line, loc.column)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Source code location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FRONTEND TRAIT
// ═══════════════════════════════════════════════════════════════════════

/// A source format that can produce expression trees.
pub trait Frontend {
    /// Parse source text into a tree.
    fn parse(&self, source: &str) -> Result<Node, ParseError>;

    /// Render an evaluation error for users of this frontend.
    fn format_error(&self, error: &EvalError) -> String {
        format!("error: {}", error)
    }

    /// Frontend name, for diagnostics.
    fn name(&self) -> &str;
}

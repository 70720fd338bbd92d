//! JSON frontend
//!
//! Reads trees in their serde shape, e.g.
//! `{"operation": {"op": "add", "left": {"leaf": 2}, "right": {"leaf": 3}}}`.

use serde::Deserialize;

use crate::frontend::{Frontend, ParseError, SourceLocation};
use crate::Node;

/// JSON tree frontend.
#[derive(Debug, Clone, Default)]
pub struct JsonFrontend {
    /// Pretty-print output of [`JsonFrontend::render`]
    pub pretty: bool,
}

impl JsonFrontend {
    /// Create a new JSON frontend with compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON frontend that pretty-prints.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Serialize a tree into the shape [`Frontend::parse`] accepts.
    pub fn render(&self, node: &Node) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(node)
        } else {
            serde_json::to_string(node)
        }
    }
}

impl Frontend for JsonFrontend {
    fn parse(&self, source: &str) -> Result<Node, ParseError> {
        // Each tree level is two nested JSON objects, so serde_json's default
        // recursion limit would reject trees this frontend itself renders.
        let mut json = serde_json::Deserializer::from_str(source);
        json.disable_recursion_limit();
        let node = Node::deserialize(serde_stacker::Deserializer::new(&mut json))
            .map_err(json_error)?;
        json.end().map_err(json_error)?;
        Ok(node)
    }

    fn name(&self) -> &str {
        "json"
    }
}

/// Convert a serde_json error, moving its position into [`SourceLocation`].
fn json_error(e: serde_json::Error) -> ParseError {
    let text = e.to_string();
    if e.line() == 0 {
        return ParseError::new(format!("invalid JSON tree: {}", text));
    }
    let position = format!(" at line {} column {}", e.line(), e.column());
    let message = text.strip_suffix(&position).unwrap_or(&text);
    ParseError::new(format!("invalid JSON tree: {}", message))
        .with_location(SourceLocation::new(e.line(), e.column()))
}

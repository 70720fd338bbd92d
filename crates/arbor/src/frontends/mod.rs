//! Frontends for arbor
//!
//! Implementations of the [`Frontend`](crate::Frontend) trait.

pub mod infix;
pub mod json;

pub use infix::InfixFrontend;
pub use json::JsonFrontend;

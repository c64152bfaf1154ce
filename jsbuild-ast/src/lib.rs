//! Syntax tree consumed by the `jsbuild` renderer.
//!
//! The shape follows the conventional Python AST: statements and expressions
//! are closed enums whose variants carry kind-specific syntax structs, and
//! every child sits behind a [`Node`](ast::node::Node) that records where it
//! came from. Trees are produced elsewhere (typically by a Python front end)
//! and arrive here as JSON; see [`from_json`].

use ast::node::Node;
use ast::stx::Module;
use error::LoadResult;

pub mod ast;
pub mod error;
pub mod loc;
pub mod operator;

/// Loads a module from its JSON serialization.
///
/// Every node is an object whose `"$t"` key names its kind, e.g.
/// `{"$t": "Name", "id": "a"}`. A `"loc"` key (`[line, column]`) is optional.
pub fn from_json(source: &str) -> LoadResult<Node<Module>> {
  Ok(serde_json::from_str(source)?)
}

#[cfg(test)]
mod tests;

use super::node::Node;
use super::stmt::Stmt;
use serde::{Deserialize, Serialize};

/// The function body handed to the renderer.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Module {
  pub body: Vec<Node<Stmt>>,
}

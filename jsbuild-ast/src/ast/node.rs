use crate::loc::Loc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Debug, Formatter};

#[derive(Serialize, Deserialize)]
pub struct Node<S> {
  // Absent for nodes built after parsing; see `Loc::synthetic`.
  #[serde(default)]
  pub loc: Loc,
  #[serde(flatten)]
  pub stx: Box<S>,
}

impl<S> Node<S> {
  pub fn new(loc: Loc, stx: S) -> Node<S> {
    Node {
      loc,
      stx: Box::new(stx),
    }
  }

  /// Creates a node that has no position in any source.
  pub fn synthetic(stx: S) -> Node<S> {
    Node::new(Loc::synthetic(), stx)
  }
}

impl<S: Debug> Debug for Node<S> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    self.stx.fmt(f)
  }
}


use serde::{Deserialize, Serialize};

use super::expr::Expr;
use super::node::Node;

/// Parameter list shared by function definitions and lambdas.
///
/// `defaults` align with the *last* positional parameters, so `def f(a, b=1)`
/// has two entries in `args` and one in `defaults`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Arguments {
  #[serde(default)]
  pub posonlyargs: Vec<Node<Arg>>,
  #[serde(default)]
  pub args: Vec<Node<Arg>>,
  #[serde(default)]
  pub vararg: Option<Node<Arg>>,
  #[serde(default)]
  pub kwonlyargs: Vec<Node<Arg>>,
  #[serde(default)]
  pub kwarg: Option<Node<Arg>>,
  #[serde(default)]
  pub defaults: Vec<Node<Expr>>,
}

impl Arguments {
  /// Positional parameters in declaration order, positional-only first.
  pub fn positional(&self) -> impl Iterator<Item = &Node<Arg>> {
    self.posonlyargs.iter().chain(self.args.iter())
  }

  /// Every name the parameter list binds inside the body.
  pub fn bound_names(&self) -> impl Iterator<Item = &str> {
    self
      .positional()
      .chain(self.vararg.iter())
      .chain(self.kwonlyargs.iter())
      .chain(self.kwarg.iter())
      .map(|a| a.stx.arg.as_str())
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Arg {
  pub arg: String,
}

use derive_more::derive::From;
use serde::{Deserialize, Serialize};

use super::func::Arguments;
use super::node::Node;
use crate::operator::{BinaryOperator, BoolOperator, CmpOperator, UnaryOperator};

#[derive(Debug, From, Serialize, Deserialize)]
#[serde(tag = "$t")]
pub enum Expr {
  BoolOp(BoolOpExpr),
  BinOp(BinOpExpr),
  UnaryOp(UnaryOpExpr),
  Lambda(LambdaExpr),
  IfExp(CondExpr),
  Dict(DictExpr),
  Compare(CompareExpr),
  Call(CallExpr),
  Constant(ConstExpr),
  Attribute(AttributeExpr),
  Subscript(SubscriptExpr),
  Name(NameExpr),
  List(ListExpr),
  Starred(StarredExpr),

  // No JavaScript rendering.
  Tuple(TupleExpr),
  Set(SetExpr),
  ListComp(ListCompExpr),
  DictComp(DictCompExpr),
  GeneratorExp(GeneratorExpr),
  Await(AwaitExpr),
  Yield(YieldExpr),
  NamedExpr(NamedExpr),
  Slice(SliceExpr),
  JoinedStr(JoinedStrExpr),
}

/// `a and b and c` is one node with three values.
#[derive(Debug, Serialize, Deserialize)]
pub struct BoolOpExpr {
  pub op: BoolOperator,
  pub values: Vec<Node<Expr>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BinOpExpr {
  pub left: Node<Expr>,
  pub op: BinaryOperator,
  pub right: Node<Expr>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UnaryOpExpr {
  pub op: UnaryOperator,
  pub operand: Node<Expr>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LambdaExpr {
  pub args: Node<Arguments>,
  pub body: Node<Expr>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CondExpr {
  pub test: Node<Expr>,
  pub body: Node<Expr>,
  pub orelse: Node<Expr>,
}

/// A `None` key is a `**mapping` unpacking entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictExpr {
  pub keys: Vec<Option<Node<Expr>>>,
  pub values: Vec<Node<Expr>>,
}

/// `a < b <= c` is one node: `left` is `a`, and `ops`/`comparators` pair up the rest.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompareExpr {
  pub left: Node<Expr>,
  pub ops: Vec<CmpOperator>,
  pub comparators: Vec<Node<Expr>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Keyword {
  // None for `**kwargs`.
  #[serde(default)]
  pub arg: Option<String>,
  pub value: Node<Expr>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CallExpr {
  pub func: Node<Expr>,
  #[serde(default)]
  pub args: Vec<Node<Expr>>,
  #[serde(default)]
  pub keywords: Vec<Node<Keyword>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstValue {
  None,
  Bool(bool),
  Int(i64),
  Float(f64),
  Str(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConstExpr {
  pub value: ConstValue,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AttributeExpr {
  pub value: Node<Expr>,
  pub attr: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubscriptExpr {
  pub value: Node<Expr>,
  pub slice: Node<Expr>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NameExpr {
  pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListExpr {
  pub elts: Vec<Node<Expr>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StarredExpr {
  pub value: Node<Expr>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TupleExpr {
  pub elts: Vec<Node<Expr>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetExpr {
  pub elts: Vec<Node<Expr>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Comprehension {
  pub target: Node<Expr>,
  pub iter: Node<Expr>,
  #[serde(default)]
  pub ifs: Vec<Node<Expr>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListCompExpr {
  pub elt: Node<Expr>,
  pub generators: Vec<Node<Comprehension>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DictCompExpr {
  pub key: Node<Expr>,
  pub value: Node<Expr>,
  pub generators: Vec<Node<Comprehension>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratorExpr {
  pub elt: Node<Expr>,
  pub generators: Vec<Node<Comprehension>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AwaitExpr {
  pub value: Node<Expr>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct YieldExpr {
  #[serde(default)]
  pub value: Option<Node<Expr>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NamedExpr {
  pub target: Node<Expr>,
  pub value: Node<Expr>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SliceExpr {
  #[serde(default)]
  pub lower: Option<Node<Expr>>,
  #[serde(default)]
  pub upper: Option<Node<Expr>>,
  #[serde(default)]
  pub step: Option<Node<Expr>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JoinedStrExpr {
  pub values: Vec<Node<Expr>>,
}

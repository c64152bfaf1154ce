use derive_more::derive::From;
use serde::{Deserialize, Serialize};

use super::expr::Expr;
use super::func::Arguments;
use super::node::Node;
use crate::operator::BinaryOperator;

// Each variant carries its own syntax struct; the surrounding `Node<Stmt>` holds the location.
#[derive(Debug, From, Serialize, Deserialize)]
#[serde(tag = "$t")]
pub enum Stmt {
  FunctionDef(FuncDefStmt),
  Return(ReturnStmt),
  Delete(DeleteStmt),
  Assign(AssignStmt),
  AugAssign(AugAssignStmt),
  For(ForStmt),
  While(WhileStmt),
  If(IfStmt),
  Raise(RaiseStmt),
  Expr(ExprStmt),
  Pass(PassStmt),
  Break(BreakStmt),
  Continue(ContinueStmt),

  // Kept in the tree model so producers can hand over whole bodies; these have no JavaScript rendering.
  ClassDef(ClassDefStmt),
  Try(TryStmt),
  With(WithStmt),
  Assert(AssertStmt),
  Import(ImportStmt),
  Global(GlobalStmt),
  Nonlocal(NonlocalStmt),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FuncDefStmt {
  pub name: String,
  pub args: Node<Arguments>,
  pub body: Vec<Node<Stmt>>,
  #[serde(default)]
  pub decorator_list: Vec<Node<Expr>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReturnStmt {
  #[serde(default)]
  pub value: Option<Node<Expr>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteStmt {
  pub targets: Vec<Node<Expr>>,
}

// `a = b = c = value` has three targets.
#[derive(Debug, Serialize, Deserialize)]
pub struct AssignStmt {
  pub targets: Vec<Node<Expr>>,
  pub value: Node<Expr>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AugAssignStmt {
  pub target: Node<Expr>,
  pub op: BinaryOperator,
  pub value: Node<Expr>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ForStmt {
  pub target: Node<Expr>,
  pub iter: Node<Expr>,
  pub body: Vec<Node<Stmt>>,
  #[serde(default)]
  pub orelse: Vec<Node<Stmt>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WhileStmt {
  pub test: Node<Expr>,
  pub body: Vec<Node<Stmt>>,
  #[serde(default)]
  pub orelse: Vec<Node<Stmt>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IfStmt {
  pub test: Node<Expr>,
  pub body: Vec<Node<Stmt>>,
  #[serde(default)]
  pub orelse: Vec<Node<Stmt>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RaiseStmt {
  // None for a bare re-raise.
  #[serde(default)]
  pub exc: Option<Node<Expr>>,
  #[serde(default)]
  pub cause: Option<Node<Expr>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExprStmt {
  pub value: Node<Expr>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PassStmt {}

#[derive(Debug, Serialize, Deserialize)]
pub struct BreakStmt {}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContinueStmt {}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassDefStmt {
  pub name: String,
  #[serde(default)]
  pub bases: Vec<Node<Expr>>,
  pub body: Vec<Node<Stmt>>,
  #[serde(default)]
  pub decorator_list: Vec<Node<Expr>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExceptHandler {
  #[serde(rename = "type", default)]
  pub typ: Option<Node<Expr>>,
  #[serde(default)]
  pub name: Option<String>,
  pub body: Vec<Node<Stmt>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TryStmt {
  pub body: Vec<Node<Stmt>>,
  #[serde(default)]
  pub handlers: Vec<Node<ExceptHandler>>,
  #[serde(default)]
  pub orelse: Vec<Node<Stmt>>,
  #[serde(default)]
  pub finalbody: Vec<Node<Stmt>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WithItem {
  pub context_expr: Node<Expr>,
  #[serde(default)]
  pub optional_vars: Option<Node<Expr>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WithStmt {
  pub items: Vec<WithItem>,
  pub body: Vec<Node<Stmt>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssertStmt {
  pub test: Node<Expr>,
  #[serde(default)]
  pub msg: Option<Node<Expr>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Alias {
  pub name: String,
  #[serde(default)]
  pub asname: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImportStmt {
  pub names: Vec<Alias>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GlobalStmt {
  pub names: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NonlocalStmt {
  pub names: Vec<String>,
}

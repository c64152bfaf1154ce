pub mod expr;
pub mod func;
pub mod node;
pub mod stmt;
pub mod stx;

use expr::Expr;
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};
use stmt::Stmt;

/// The discriminant of a statement or expression, used to name a node in
/// messages without borrowing it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum NodeKind {
  // Statements.
  FunctionDef,
  Return,
  Delete,
  Assign,
  AugAssign,
  For,
  While,
  If,
  Raise,
  Expr,
  Pass,
  Break,
  Continue,
  ClassDef,
  Try,
  With,
  Assert,
  Import,
  Global,
  Nonlocal,

  // Expressions.
  BoolOp,
  BinOp,
  UnaryOp,
  Lambda,
  IfExp,
  Dict,
  Compare,
  Call,
  Constant,
  Attribute,
  Subscript,
  Name,
  List,
  Starred,
  Tuple,
  Set,
  ListComp,
  DictComp,
  GeneratorExp,
  Await,
  Yield,
  NamedExpr,
  Slice,
  JoinedStr,
}

impl Display for NodeKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(self, f)
  }
}

impl Stmt {
  pub fn kind(&self) -> NodeKind {
    match self {
      Stmt::FunctionDef(_) => NodeKind::FunctionDef,
      Stmt::Return(_) => NodeKind::Return,
      Stmt::Delete(_) => NodeKind::Delete,
      Stmt::Assign(_) => NodeKind::Assign,
      Stmt::AugAssign(_) => NodeKind::AugAssign,
      Stmt::For(_) => NodeKind::For,
      Stmt::While(_) => NodeKind::While,
      Stmt::If(_) => NodeKind::If,
      Stmt::Raise(_) => NodeKind::Raise,
      Stmt::Expr(_) => NodeKind::Expr,
      Stmt::Pass(_) => NodeKind::Pass,
      Stmt::Break(_) => NodeKind::Break,
      Stmt::Continue(_) => NodeKind::Continue,
      Stmt::ClassDef(_) => NodeKind::ClassDef,
      Stmt::Try(_) => NodeKind::Try,
      Stmt::With(_) => NodeKind::With,
      Stmt::Assert(_) => NodeKind::Assert,
      Stmt::Import(_) => NodeKind::Import,
      Stmt::Global(_) => NodeKind::Global,
      Stmt::Nonlocal(_) => NodeKind::Nonlocal,
    }
  }
}

impl Expr {
  pub fn kind(&self) -> NodeKind {
    match self {
      Expr::BoolOp(_) => NodeKind::BoolOp,
      Expr::BinOp(_) => NodeKind::BinOp,
      Expr::UnaryOp(_) => NodeKind::UnaryOp,
      Expr::Lambda(_) => NodeKind::Lambda,
      Expr::IfExp(_) => NodeKind::IfExp,
      Expr::Dict(_) => NodeKind::Dict,
      Expr::Compare(_) => NodeKind::Compare,
      Expr::Call(_) => NodeKind::Call,
      Expr::Constant(_) => NodeKind::Constant,
      Expr::Attribute(_) => NodeKind::Attribute,
      Expr::Subscript(_) => NodeKind::Subscript,
      Expr::Name(_) => NodeKind::Name,
      Expr::List(_) => NodeKind::List,
      Expr::Starred(_) => NodeKind::Starred,
      Expr::Tuple(_) => NodeKind::Tuple,
      Expr::Set(_) => NodeKind::Set,
      Expr::ListComp(_) => NodeKind::ListComp,
      Expr::DictComp(_) => NodeKind::DictComp,
      Expr::GeneratorExp(_) => NodeKind::GeneratorExp,
      Expr::Await(_) => NodeKind::Await,
      Expr::Yield(_) => NodeKind::Yield,
      Expr::NamedExpr(_) => NodeKind::NamedExpr,
      Expr::Slice(_) => NodeKind::Slice,
      Expr::JoinedStr(_) => NodeKind::JoinedStr,
    }
  }
}

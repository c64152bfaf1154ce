//! Named field access on syntax structs, so templates can refer to children
//! by name (`${test}`, `${attr:raw}`).

use jsbuild_ast::ast::expr::{
  AttributeExpr, BinOpExpr, BoolOpExpr, CallExpr, CompareExpr, CondExpr, DictExpr, Expr,
  LambdaExpr, ListExpr, NameExpr, StarredExpr, SubscriptExpr, UnaryOpExpr,
};
use jsbuild_ast::ast::node::Node;
use jsbuild_ast::ast::stmt::{
  AssignStmt, AugAssignStmt, BreakStmt, ContinueStmt, DeleteStmt, ExprStmt, ForStmt,
  FuncDefStmt, IfStmt, PassStmt, RaiseStmt, ReturnStmt, Stmt, WhileStmt,
};
use jsbuild_ast::ast::NodeKind;
use jsbuild_ast::operator::{BinaryOperator, BoolOperator, UnaryOperator};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Field {
  Args,
  Attr,
  Body,
  Comparators,
  Elts,
  Exc,
  Func,
  Id,
  Iter,
  Left,
  Name,
  Op,
  Operand,
  Orelse,
  Right,
  Slice,
  Target,
  Targets,
  Test,
  Value,
  Values,
}

impl Field {
  pub fn from_name(name: &str) -> Option<Field> {
    Some(match name {
      "args" => Field::Args,
      "attr" => Field::Attr,
      "body" => Field::Body,
      "comparators" => Field::Comparators,
      "elts" => Field::Elts,
      "exc" => Field::Exc,
      "func" => Field::Func,
      "id" => Field::Id,
      "iter" => Field::Iter,
      "left" => Field::Left,
      "name" => Field::Name,
      "op" => Field::Op,
      "operand" => Field::Operand,
      "orelse" => Field::Orelse,
      "right" => Field::Right,
      "slice" => Field::Slice,
      "target" => Field::Target,
      "targets" => Field::Targets,
      "test" => Field::Test,
      "value" => Field::Value,
      "values" => Field::Values,
      _ => return None,
    })
  }

  pub fn name(self) -> &'static str {
    match self {
      Field::Args => "args",
      Field::Attr => "attr",
      Field::Body => "body",
      Field::Comparators => "comparators",
      Field::Elts => "elts",
      Field::Exc => "exc",
      Field::Func => "func",
      Field::Id => "id",
      Field::Iter => "iter",
      Field::Left => "left",
      Field::Name => "name",
      Field::Op => "op",
      Field::Operand => "operand",
      Field::Orelse => "orelse",
      Field::Right => "right",
      Field::Slice => "slice",
      Field::Target => "target",
      Field::Targets => "targets",
      Field::Test => "test",
      Field::Value => "value",
      Field::Values => "values",
    }
  }
}

impl Display for Field {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// A borrowed, not yet rendered field value.
#[derive(Clone, Copy, Debug)]
pub enum FieldValue<'a> {
  Stmts(&'a [Node<Stmt>]),
  Expr(&'a Node<Expr>),
  // Absent children render as `null`.
  OptExpr(Option<&'a Node<Expr>>),
  Exprs(&'a [Node<Expr>]),
  Ident(&'a str),
  BoolOp(BoolOperator),
  BinOp(BinaryOperator),
  UnaryOp(UnaryOperator),
}

/// Implemented by every syntax struct the renderer reads by field name.
pub trait Fields {
  fn kind(&self) -> NodeKind;

  /// Returns None when this kind has no such field.
  fn field(&self, field: Field) -> Option<FieldValue<'_>>;
}

macro_rules! impl_fields {
  ($t:ty, $kind:ident) => {
    impl Fields for $t {
      fn kind(&self) -> NodeKind {
        NodeKind::$kind
      }

      fn field(&self, _field: Field) -> Option<FieldValue<'_>> {
        None
      }
    }
  };
  ($t:ty, $kind:ident, |$s:ident| { $($f:ident => $v:expr),* $(,)? }) => {
    impl Fields for $t {
      fn kind(&self) -> NodeKind {
        NodeKind::$kind
      }

      fn field(&self, field: Field) -> Option<FieldValue<'_>> {
        let $s = self;
        match field {
          $(Field::$f => Some($v),)*
          #[allow(unreachable_patterns)]
          _ => None,
        }
      }
    }
  };
}

impl_fields!(PassStmt, Pass);
impl_fields!(BreakStmt, Break);
impl_fields!(ContinueStmt, Continue);
impl_fields!(FuncDefStmt, FunctionDef, |s| {
  Name => FieldValue::Ident(&s.name),
  Body => FieldValue::Stmts(&s.body),
});
impl_fields!(ReturnStmt, Return, |s| {
  Value => FieldValue::OptExpr(s.value.as_ref()),
});
impl_fields!(DeleteStmt, Delete, |s| {
  Targets => FieldValue::Exprs(&s.targets),
});
impl_fields!(AssignStmt, Assign, |s| {
  Targets => FieldValue::Exprs(&s.targets),
  Value => FieldValue::Expr(&s.value),
});
impl_fields!(AugAssignStmt, AugAssign, |s| {
  Target => FieldValue::Expr(&s.target),
  Op => FieldValue::BinOp(s.op),
  Value => FieldValue::Expr(&s.value),
});
impl_fields!(ForStmt, For, |s| {
  Target => FieldValue::Expr(&s.target),
  Iter => FieldValue::Expr(&s.iter),
  Body => FieldValue::Stmts(&s.body),
  Orelse => FieldValue::Stmts(&s.orelse),
});
impl_fields!(WhileStmt, While, |s| {
  Test => FieldValue::Expr(&s.test),
  Body => FieldValue::Stmts(&s.body),
  Orelse => FieldValue::Stmts(&s.orelse),
});
impl_fields!(IfStmt, If, |s| {
  Test => FieldValue::Expr(&s.test),
  Body => FieldValue::Stmts(&s.body),
  Orelse => FieldValue::Stmts(&s.orelse),
});
impl_fields!(RaiseStmt, Raise, |s| {
  Exc => FieldValue::OptExpr(s.exc.as_ref()),
});
impl_fields!(ExprStmt, Expr, |s| {
  Value => FieldValue::Expr(&s.value),
});
impl_fields!(BoolOpExpr, BoolOp, |s| {
  Op => FieldValue::BoolOp(s.op),
  Values => FieldValue::Exprs(&s.values),
});
impl_fields!(BinOpExpr, BinOp, |s| {
  Left => FieldValue::Expr(&s.left),
  Op => FieldValue::BinOp(s.op),
  Right => FieldValue::Expr(&s.right),
});
impl_fields!(UnaryOpExpr, UnaryOp, |s| {
  Op => FieldValue::UnaryOp(s.op),
  Operand => FieldValue::Expr(&s.operand),
});
impl_fields!(LambdaExpr, Lambda, |s| {
  Body => FieldValue::Expr(&s.body),
});
impl_fields!(CondExpr, IfExp, |s| {
  Test => FieldValue::Expr(&s.test),
  Body => FieldValue::Expr(&s.body),
  Orelse => FieldValue::Expr(&s.orelse),
});
impl_fields!(DictExpr, Dict, |s| {
  Values => FieldValue::Exprs(&s.values),
});
impl_fields!(CompareExpr, Compare, |s| {
  Left => FieldValue::Expr(&s.left),
  Comparators => FieldValue::Exprs(&s.comparators),
});
impl_fields!(CallExpr, Call, |s| {
  Func => FieldValue::Expr(&s.func),
  Args => FieldValue::Exprs(&s.args),
});
impl_fields!(AttributeExpr, Attribute, |s| {
  Value => FieldValue::Expr(&s.value),
  Attr => FieldValue::Ident(&s.attr),
});
impl_fields!(SubscriptExpr, Subscript, |s| {
  Value => FieldValue::Expr(&s.value),
  Slice => FieldValue::Expr(&s.slice),
});
impl_fields!(NameExpr, Name, |s| {
  Id => FieldValue::Ident(&s.id),
});
impl_fields!(ListExpr, List, |s| {
  Elts => FieldValue::Exprs(&s.elts),
});
impl_fields!(StarredExpr, Starred, |s| {
  Value => FieldValue::Expr(&s.value),
});

#[cfg(test)]
mod tests {
  use super::{Field, FieldValue, Fields};
  use jsbuild_ast::ast::expr::{AttributeExpr, Expr, NameExpr};
  use jsbuild_ast::ast::node::Node;
  use jsbuild_ast::ast::NodeKind;

  #[test]
  fn test_field_names_round_trip() {
    for name in ["args", "attr", "body", "orelse", "targets", "values"] {
      assert_eq!(Field::from_name(name).map(Field::name), Some(name));
    }
    assert_eq!(Field::from_name("nope"), None);
  }

  #[test]
  fn test_missing_field_is_none() {
    let attr = AttributeExpr {
      value: Node::synthetic(Expr::Name(NameExpr { id: "a".into() })),
      attr: "b".into(),
    };
    assert_eq!(attr.kind(), NodeKind::Attribute);
    assert!(matches!(attr.field(Field::Attr), Some(FieldValue::Ident("b"))));
    assert!(attr.field(Field::Test).is_none());
  }
}

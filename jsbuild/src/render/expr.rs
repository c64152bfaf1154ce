use super::field::Field;
use super::operator::{bool_op, cmp_op};
use super::{quote, Renderer, LIST_SEP};
use crate::cache::NodeKey;
use crate::err::{with_node_context, RenderError, RenderResult};
use crate::template::{
  ATTRIBUTE, BIN_OP, BIN_OP_FLOOR_DIV, IF_EXP, LIST, NAME, STARRED, SUBSCRIPT, UNARY_OP,
};
use itertools::Itertools;
use jsbuild_ast::ast::expr::{
  BoolOpExpr, CallExpr, CompareExpr, ConstValue, DictExpr, Expr, LambdaExpr,
};
use jsbuild_ast::ast::node::Node;
use jsbuild_ast::ast::NodeKind;
use jsbuild_ast::operator::BinaryOperator;

impl Renderer {
  pub(crate) fn emit_expr(&mut self, expr: &Node<Expr>) -> RenderResult<String> {
    let key = NodeKey::of(expr);
    with_node_context(expr.loc, || match expr.stx.as_ref() {
      Expr::BoolOp(bool_expr) => self.render_bool_op(bool_expr),
      Expr::BinOp(bin) => {
        let template = match bin.op {
          BinaryOperator::FloorDiv => &BIN_OP_FLOOR_DIV,
          _ => &BIN_OP,
        };
        self.template(key, bin, template)
      }
      Expr::UnaryOp(unary) => self.template(key, unary, &UNARY_OP),
      Expr::Lambda(lambda) => self.render_lambda(key, lambda),
      Expr::IfExp(cond) => self.template(key, cond, &IF_EXP),
      Expr::Dict(dict) => self.render_dict(dict),
      Expr::Compare(cmp) => self.render_compare(key, cmp),
      Expr::Call(call) => self.render_call(key, call),
      Expr::Constant(c) => Ok(render_const(&c.value)),
      Expr::Attribute(attr) => self.template(key, attr, &ATTRIBUTE),
      Expr::Subscript(sub) => self.template(key, sub, &SUBSCRIPT),
      Expr::Name(name) => self.template(key, name, &NAME),
      Expr::List(list) => self.template(key, list, &LIST),
      Expr::Starred(starred) => self.template(key, starred, &STARRED),
      Expr::Tuple(_)
      | Expr::Set(_)
      | Expr::ListComp(_)
      | Expr::DictComp(_)
      | Expr::GeneratorExp(_)
      | Expr::Await(_)
      | Expr::Yield(_)
      | Expr::NamedExpr(_)
      | Expr::Slice(_)
      | Expr::JoinedStr(_) => Err(RenderError::unsupported_kind(expr.stx.kind())),
    })
  }

  fn render_bool_op(&mut self, bool_expr: &BoolOpExpr) -> RenderResult<String> {
    let values = bool_expr
      .values
      .iter()
      .map(|v| self.emit_expr(v))
      .collect::<RenderResult<Vec<_>>>()?;
    let sep = format!(" {} ", bool_op(bool_expr.op));
    Ok(format!("({})", values.join(&sep)))
  }

  fn render_lambda(&mut self, key: NodeKey, lambda: &LambdaExpr) -> RenderResult<String> {
    self.in_child_scope(lambda.args.stx.bound_names(), |r| {
      let params = r.render_params(&lambda.args)?;
      let body = r.attr(key, lambda, Field::Body)?;
      Ok(format!("(({params}) => ({body}))"))
    })
  }

  fn render_dict(&mut self, dict: &DictExpr) -> RenderResult<String> {
    let mut entries = Vec::with_capacity(dict.values.len());
    for (key, value) in dict.keys.iter().zip(dict.values.iter()) {
      let value = self.emit_expr(value)?;
      entries.push(match key {
        Some(key) => format!("{}: {value}", self.emit_expr(key)?),
        None => format!("...{value}"),
      });
    }
    Ok(format!("{{{}}}", entries.join(LIST_SEP)))
  }

  /// `a < b < c` compares each adjacent pair and requires all of them to hold.
  ///
  /// Every middle operand appears in two comparisons, so its text is emitted
  /// twice: `a < f() < c` calls `f()` twice in the output, although the chain
  /// itself evaluates it once.
  fn render_compare(&mut self, key: NodeKey, cmp: &CompareExpr) -> RenderResult<String> {
    if cmp.ops.is_empty() || cmp.ops.len() != cmp.comparators.len() {
      return Err(RenderError::missing_field(NodeKind::Compare, Field::Comparators));
    }
    let mut operands = vec![self.attr(key, cmp, Field::Left)?.to_string()];
    for comparator in cmp.comparators.iter() {
      operands.push(self.emit_expr(comparator)?);
    }
    let mut pairs = Vec::with_capacity(cmp.ops.len());
    for ((left, right), op) in operands.iter().tuple_windows().zip(cmp.ops.iter()) {
      pairs.push(format!("({left} {} {right})", cmp_op(*op)?));
    }
    Ok(match pairs.len() {
      1 => pairs.remove(0),
      _ => format!("({})", pairs.join(" && ")),
    })
  }

  fn render_call(&mut self, key: NodeKey, call: &CallExpr) -> RenderResult<String> {
    if let Some(keyword) = call.keywords.first() {
      return Err(RenderError::unsupported("keyword arguments").with_loc(keyword.loc));
    }
    let func = self.attr(key, call, Field::Func)?;
    let args = self.attr(key, call, Field::Args)?;
    Ok(format!("{func}({args})"))
  }
}

/// Renders a literal. Floats always carry a fractional part or exponent so
/// they read back as the same number.
pub fn render_const(value: &ConstValue) -> String {
  match value {
    ConstValue::None => "null".to_string(),
    ConstValue::Bool(true) => "true".to_string(),
    ConstValue::Bool(false) => "false".to_string(),
    ConstValue::Int(v) => v.to_string(),
    ConstValue::Float(v) if v.is_nan() => "NaN".to_string(),
    ConstValue::Float(v) if v.is_infinite() => {
      if v.is_sign_positive() {
        "Infinity".to_string()
      } else {
        "-Infinity".to_string()
      }
    }
    ConstValue::Float(v) => format!("{v:?}"),
    ConstValue::Str(s) => quote(s),
  }
}

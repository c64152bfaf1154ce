//! Initial bindings: host values made visible to the rendered body as
//! leading `var` declarations.

use jsbuild_ast::ast::expr::{ConstExpr, ConstValue, DictExpr, Expr, ListExpr, NameExpr};
use jsbuild_ast::ast::node::Node;
use jsbuild_ast::ast::stmt::{AssignStmt, Stmt};
use serde_json::Value;

/// Converts a JSON value into the expression that produces it.
pub fn value_to_expr(value: &Value) -> Node<Expr> {
  let expr = match value {
    Value::Null => constant(ConstValue::None),
    Value::Bool(b) => constant(ConstValue::Bool(*b)),
    Value::Number(n) => match n.as_i64() {
      Some(i) => constant(ConstValue::Int(i)),
      // Integers beyond i64 lose precision the same way JavaScript numbers do.
      None => constant(ConstValue::Float(n.as_f64().unwrap_or(f64::NAN))),
    },
    Value::String(s) => constant(ConstValue::Str(s.clone())),
    Value::Array(items) => Expr::List(ListExpr {
      elts: items.iter().map(value_to_expr).collect(),
    }),
    Value::Object(entries) => {
      let (keys, values) = entries
        .iter()
        .map(|(k, v)| {
          let key = Node::synthetic(constant(ConstValue::Str(k.clone())));
          (Some(key), value_to_expr(v))
        })
        .unzip();
      Expr::Dict(DictExpr { keys, values })
    }
  };
  Node::synthetic(expr)
}

fn constant(value: ConstValue) -> Expr {
  Expr::Constant(ConstExpr { value })
}

/// Builds `name = value` for one binding.
pub fn binding_stmt(name: &str, value: &Value) -> Node<Stmt> {
  Node::synthetic(Stmt::Assign(AssignStmt {
    targets: vec![Node::synthetic(Expr::Name(NameExpr {
      id: name.to_string(),
    }))],
    value: value_to_expr(value),
  }))
}

#[cfg(test)]
mod tests {
  use super::value_to_expr;
  use crate::render::Renderer;
  use serde_json::json;

  fn render(value: serde_json::Value) -> String {
    Renderer::new().render_expr(&value_to_expr(&value)).unwrap()
  }

  #[test]
  fn test_scalars() {
    assert_eq!(render(json!(null)), "null");
    assert_eq!(render(json!(true)), "true");
    assert_eq!(render(json!(-3)), "-3");
    assert_eq!(render(json!(2.5)), "2.5");
    assert_eq!(render(json!("hi")), "\"hi\"");
  }

  #[test]
  fn test_containers() {
    assert_eq!(render(json!([1, [2], []])), "[1, [2], []]");
    // Object entries keep their source order.
    assert_eq!(render(json!({"w": 960, "tags": ["a"]})), "{\"w\": 960, \"tags\": [\"a\"]}");
    assert_eq!(render(json!({})), "{}");
  }

  #[test]
  fn test_large_unsigned_becomes_float() {
    assert_eq!(render(json!(u64::MAX)), "1.8446744073709552e19");
  }
}

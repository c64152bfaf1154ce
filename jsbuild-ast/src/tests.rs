use crate::ast::expr::{ConstValue, Expr};
use crate::ast::stmt::Stmt;
use crate::ast::NodeKind;
use crate::from_json;
use crate::loc::Loc;
use crate::operator::{BinaryOperator, CmpOperator};

#[test]
fn test_load_assignment_with_locations() {
  let module = from_json(
    r#"{"body": [
      {"$t": "Assign", "loc": [2, 4],
       "targets": [{"$t": "Name", "id": "a", "loc": [2, 4]}],
       "value": {"$t": "Constant", "value": 10, "loc": [2, 8]}}
    ]}"#,
  )
  .unwrap();
  assert_eq!(module.stx.body.len(), 1);
  let stmt = &module.stx.body[0];
  assert_eq!(stmt.loc, Loc::new(2, 4));
  assert_eq!(stmt.stx.kind(), NodeKind::Assign);
  let Stmt::Assign(assign) = stmt.stx.as_ref() else {
    panic!("expected assignment, got {stmt:?}");
  };
  assert_eq!(assign.value.loc, Loc::new(2, 8));
  match assign.value.stx.as_ref() {
    Expr::Constant(c) => assert_eq!(c.value, ConstValue::Int(10)),
    other => panic!("expected constant, got {other:?}"),
  };
}

#[test]
fn test_missing_loc_is_synthetic() {
  let module = from_json(r#"{"body": [{"$t": "Pass"}]}"#).unwrap();
  assert!(module.stx.body[0].loc.is_synthetic());
  assert_eq!(module.stx.body[0].stx.kind(), NodeKind::Pass);
}

#[test]
fn test_constant_values() {
  let module = from_json(
    r#"{"body": [
      {"$t": "Expr", "value": {"$t": "Constant", "value": null}},
      {"$t": "Expr", "value": {"$t": "Constant", "value": true}},
      {"$t": "Expr", "value": {"$t": "Constant", "value": 2.5}},
      {"$t": "Expr", "value": {"$t": "Constant", "value": "hi"}}
    ]}"#,
  )
  .unwrap();
  let values: Vec<ConstValue> = module
    .stx
    .body
    .iter()
    .map(|s| match s.stx.as_ref() {
      Stmt::Expr(e) => match e.value.stx.as_ref() {
        Expr::Constant(c) => c.value.clone(),
        other => panic!("expected constant, got {other:?}"),
      },
      other => panic!("expected expression statement, got {other:?}"),
    })
    .collect();
  assert_eq!(values, vec![
    ConstValue::None,
    ConstValue::Bool(true),
    ConstValue::Float(2.5),
    ConstValue::Str("hi".into()),
  ]);
}

#[test]
fn test_operators_and_optional_fields() {
  let module = from_json(
    r#"{"body": [
      {"$t": "If",
       "test": {"$t": "Compare", "left": {"$t": "Name", "id": "c"},
                "ops": ["Eq"], "comparators": [{"$t": "Constant", "value": 42}]},
       "body": [{"$t": "AugAssign", "target": {"$t": "Name", "id": "c"}, "op": "FloorDiv",
                 "value": {"$t": "Constant", "value": 2}}]}
    ]}"#,
  )
  .unwrap();
  let Stmt::If(if_stmt) = module.stx.body[0].stx.as_ref() else {
    panic!("expected if");
  };
  assert!(if_stmt.orelse.is_empty());
  let Expr::Compare(cmp) = if_stmt.test.stx.as_ref() else {
    panic!("expected comparison");
  };
  assert_eq!(cmp.ops, vec![CmpOperator::Eq]);
  let Stmt::AugAssign(aug) = if_stmt.body[0].stx.as_ref() else {
    panic!("expected augmented assignment");
  };
  assert_eq!(aug.op, BinaryOperator::FloorDiv);
}

#[test]
fn test_unknown_kind_is_a_load_error() {
  let err = from_json(r#"{"body": [{"$t": "Frobnicate"}]}"#).unwrap_err();
  assert!(err.to_string().starts_with("invalid syntax tree"));
}

#[test]
fn test_parameter_names() {
  let module = from_json(
    r#"{"body": [
      {"$t": "FunctionDef", "name": "f",
       "args": {"args": [{"arg": "a"}, {"arg": "b"}], "vararg": {"arg": "rest"}},
       "body": [{"$t": "Pass"}]}
    ]}"#,
  )
  .unwrap();
  let Stmt::FunctionDef(def) = module.stx.body[0].stx.as_ref() else {
    panic!("expected function definition");
  };
  let names: Vec<&str> = def.args.stx.bound_names().collect();
  assert_eq!(names, vec!["a", "b", "rest"]);
}

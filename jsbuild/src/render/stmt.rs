use super::field::Field;
use super::{Renderer, STMT_SEP};
use crate::cache::NodeKey;
use crate::err::{with_node_context, RenderError, RenderResult};
use crate::template::{
  AUG_ASSIGN, AUG_ASSIGN_FLOOR_DIV, BREAK, CONTINUE, EXPR, IF, PASS, RAISE, RETURN, WHILE,
};
use jsbuild_ast::ast::expr::Expr;
use jsbuild_ast::ast::node::Node;
use jsbuild_ast::ast::stmt::{AssignStmt, DeleteStmt, ForStmt, FuncDefStmt, Stmt};
use jsbuild_ast::operator::BinaryOperator;
use tracing::trace;

impl Renderer {
  pub(crate) fn emit_stmt(&mut self, stmt: &Node<Stmt>) -> RenderResult<String> {
    let key = NodeKey::of(stmt);
    with_node_context(stmt.loc, || match stmt.stx.as_ref() {
      Stmt::FunctionDef(def) => self.render_function_def(key, def),
      Stmt::Return(ret) => self.template(key, ret, &RETURN),
      Stmt::Delete(del) => self.render_delete(del),
      Stmt::Assign(assign) => self.render_assign(key, assign),
      Stmt::AugAssign(aug) => {
        let template = match aug.op {
          BinaryOperator::FloorDiv => &AUG_ASSIGN_FLOOR_DIV,
          _ => &AUG_ASSIGN,
        };
        self.template(key, aug, template)
      }
      Stmt::For(for_stmt) => self.render_for(key, for_stmt),
      Stmt::While(while_stmt) => {
        reject_loop_else(&while_stmt.orelse, "while")?;
        self.template(key, while_stmt, &WHILE)
      }
      // Both branches render in the enclosing scope, so a name declared in
      // the `if` branch is plainly assigned in the `else` branch.
      Stmt::If(if_stmt) => self.template(key, if_stmt, &IF),
      Stmt::Raise(raise) => {
        if let Some(cause) = &raise.cause {
          return Err(RenderError::unsupported("raise ... from").with_loc(cause.loc));
        }
        self.template(key, raise, &RAISE)
      }
      Stmt::Expr(expr) => self.template(key, expr, &EXPR),
      Stmt::Pass(pass) => self.template(key, pass, &PASS),
      Stmt::Break(brk) => self.template(key, brk, &BREAK),
      Stmt::Continue(cont) => self.template(key, cont, &CONTINUE),
      Stmt::ClassDef(_)
      | Stmt::Try(_)
      | Stmt::With(_)
      | Stmt::Assert(_)
      | Stmt::Import(_)
      | Stmt::Global(_)
      | Stmt::Nonlocal(_) => Err(RenderError::unsupported_kind(stmt.stx.kind())),
    })
  }

  /// Each target of `a = b = c = value` is its own statement. A target gets
  /// `var` unless its name is already visible or it is a member/element
  /// reference.
  fn render_assign(&mut self, key: NodeKey, assign: &AssignStmt) -> RenderResult<String> {
    let value = self.attr(key, assign, Field::Value)?;
    let mut parts = Vec::with_capacity(assign.targets.len());
    for target in assign.targets.iter() {
      let name = self.emit_expr(target)?;
      let is_reference = name.contains('.') || name.contains('[');
      if is_reference || self.scopes.contains(&name) {
        trace!(name = %name, declared = false, "assignment");
        parts.push(format!("{name} = {value}"));
      } else {
        trace!(name = %name, declared = true, "assignment");
        self.scopes.declare([name.as_str()]);
        parts.push(format!("var {name} = {value}"));
      }
    }
    Ok(parts.join(STMT_SEP))
  }

  fn render_delete(&mut self, del: &DeleteStmt) -> RenderResult<String> {
    let parts = del
      .targets
      .iter()
      .map(|t| Ok(format!("delete {}", self.emit_expr(t)?)))
      .collect::<RenderResult<Vec<_>>>()?;
    Ok(parts.join(STMT_SEP))
  }

  fn render_function_def(&mut self, key: NodeKey, def: &FuncDefStmt) -> RenderResult<String> {
    if let Some(decorator) = def.decorator_list.first() {
      return Err(RenderError::unsupported("decorators").with_loc(decorator.loc));
    }
    let name = self.raw_attr(key, def, Field::Name)?;
    self.in_child_scope(def.args.stx.bound_names(), |r| {
      let params = r.render_params(&def.args)?;
      let body = r.attr(key, def, Field::Body)?;
      Ok(format!("function {name}({params}) {{\n{body}\n}}"))
    })
  }

  /// `for x in xs: ...` becomes `xs.forEach((x, _i) => {...})`; the body is
  /// a callback, so it gets its own scope with the loop variable as parameter.
  fn render_for(&mut self, key: NodeKey, for_stmt: &ForStmt) -> RenderResult<String> {
    reject_loop_else(&for_stmt.orelse, "for")?;
    let Expr::Name(target) = for_stmt.target.stx.as_ref() else {
      return Err(
        RenderError::unsupported(format!("{} as loop target", for_stmt.target.stx.kind()))
          .with_loc(for_stmt.target.loc),
      );
    };
    let iter = self.attr(key, for_stmt, Field::Iter)?;
    let target = target.id.as_str();
    self.in_child_scope([target], |r| {
      let body = r.attr(key, for_stmt, Field::Body)?;
      Ok(format!("{iter}.forEach(({target}, _i) => {{\n{body}\n}})"))
    })
  }
}

fn reject_loop_else(orelse: &[Node<Stmt>], keyword: &str) -> RenderResult<()> {
  match orelse.first() {
    Some(first) => {
      Err(RenderError::unsupported(format!("{keyword}-else clause")).with_loc(first.loc))
    }
    None => Ok(()),
  }
}

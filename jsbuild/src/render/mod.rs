//! The node renderer.
//!
//! Dispatch is an exhaustive match over [`Stmt`] and [`Expr`]. Most kinds
//! render through a static [`Template`]; the rest need procedural rules
//! because they read or write scope state, or because their shape depends
//! on the node (variable-length lists, chained comparisons).

pub mod expr;
pub mod field;
pub mod operator;
pub mod stmt;

use crate::cache::{AttrCache, CacheStats, NodeKey};
use crate::err::{RenderError, RenderResult};
use crate::scope::ScopeStack;
use crate::template::{Piece, Template};
use field::{Field, FieldValue, Fields};
use itertools::Itertools;
use jsbuild_ast::ast::expr::Expr;
use jsbuild_ast::ast::func::Arguments;
use jsbuild_ast::ast::node::Node;
use jsbuild_ast::ast::stmt::Stmt;
use std::sync::Arc;

/// Separates statements in a body.
pub const STMT_SEP: &str = ";\n";
/// Separates arguments, parameters and collection elements.
pub const LIST_SEP: &str = ", ";

/// State of one render pass: the scope chain and the attribute cache.
///
/// Scopes persist across calls, so one renderer can render a sequence of
/// bodies that build on each other's declarations. Independent trees can be
/// rendered concurrently with one renderer each.
#[derive(Debug, Default)]
pub struct Renderer {
  scopes: ScopeStack,
  cache: AttrCache,
}

impl Renderer {
  pub fn new() -> Renderer {
    Renderer::default()
  }

  pub fn with_scopes(scopes: ScopeStack) -> Renderer {
    Renderer {
      scopes,
      cache: AttrCache::new(),
    }
  }

  /// Statistics of the most recent pass.
  pub fn stats(&self) -> CacheStats {
    self.cache.stats()
  }

  /// Renders statements in order, joined by [`STMT_SEP`].
  ///
  /// Each call is a new pass: cached field renderings from earlier calls are
  /// discarded, while declarations stay in scope.
  pub fn render_stmts(&mut self, stmts: &[Node<Stmt>]) -> RenderResult<String> {
    self.cache.clear();
    self.emit_stmts(stmts)
  }

  /// Renders one expression as a new pass, like [`Renderer::render_stmts`].
  pub fn render_expr(&mut self, expr: &Node<Expr>) -> RenderResult<String> {
    self.cache.clear();
    self.emit_expr(expr)
  }

  // Order matters: a statement's declarations are visible to the ones after it.
  pub(crate) fn emit_stmts(&mut self, stmts: &[Node<Stmt>]) -> RenderResult<String> {
    let mut parts = Vec::with_capacity(stmts.len());
    for stmt in stmts {
      parts.push(self.emit_stmt(stmt)?);
    }
    Ok(parts.join(STMT_SEP))
  }

  pub(crate) fn emit_exprs(&mut self, exprs: &[Node<Expr>]) -> RenderResult<String> {
    let parts = exprs
      .iter()
      .map(|e| self.emit_expr(e))
      .collect::<RenderResult<Vec<_>>>()?;
    Ok(parts.join(LIST_SEP))
  }

  /// Reads the rendered text of `field`, computing it on first access.
  pub(crate) fn attr<P: Fields>(
    &mut self,
    node: NodeKey,
    stx: &P,
    field: Field,
  ) -> RenderResult<Arc<str>> {
    if let Some(text) = self.cache.rendered(node, field) {
      return Ok(text);
    }
    let value = stx
      .field(field)
      .ok_or_else(|| RenderError::missing_field(stx.kind(), field))?;
    let text = self.render_field(value)?;
    Ok(self.cache.store_rendered(node, field, text))
  }

  /// Reads the raw value of `field`. Only identifier fields have one.
  pub(crate) fn raw_attr<P: Fields>(
    &mut self,
    node: NodeKey,
    stx: &P,
    field: Field,
  ) -> RenderResult<Arc<str>> {
    if let Some(value) = self.cache.raw(node, field) {
      return Ok(value);
    }
    match stx.field(field) {
      Some(FieldValue::Ident(id)) => Ok(self.cache.store_raw(node, field, id)),
      Some(_) => Err(RenderError::raw_unavailable(stx.kind(), field)),
      None => Err(RenderError::missing_field(stx.kind(), field)),
    }
  }

  fn render_field(&mut self, value: FieldValue<'_>) -> RenderResult<String> {
    match value {
      FieldValue::Stmts(stmts) => self.emit_stmts(stmts),
      FieldValue::Expr(expr) | FieldValue::OptExpr(Some(expr)) => self.emit_expr(expr),
      FieldValue::OptExpr(None) => Ok("null".to_string()),
      FieldValue::Exprs(exprs) => self.emit_exprs(exprs),
      // A plain string field renders as a string literal; templates use `:raw` for names.
      FieldValue::Ident(id) => Ok(quote(id)),
      FieldValue::BoolOp(op) => Ok(operator::bool_op(op).to_string()),
      FieldValue::BinOp(op) => operator::binary_op(op).map(str::to_string),
      FieldValue::UnaryOp(op) => Ok(operator::unary_op(op).to_string()),
    }
  }

  pub(crate) fn template<P: Fields>(
    &mut self,
    node: NodeKey,
    stx: &P,
    template: &Template,
  ) -> RenderResult<String> {
    let mut out = String::new();
    for piece in template.pieces() {
      match *piece {
        Piece::Lit(text) => out.push_str(text),
        Piece::Rendered(field) => out.push_str(&self.attr(node, stx, field)?),
        Piece::Raw(field) => out.push_str(&self.raw_attr(node, stx, field)?),
      };
    }
    Ok(out)
  }

  /// Runs `f` in a fresh child scope with `names` pre-declared.
  pub(crate) fn in_child_scope<T, I, N>(
    &mut self,
    names: I,
    f: impl FnOnce(&mut Renderer) -> RenderResult<T>,
  ) -> RenderResult<T>
  where
    I: IntoIterator<Item = N>,
    N: Into<String>,
  {
    self.scopes.enter_new();
    self.scopes.declare(names);
    let res = f(self);
    self.scopes.exit();
    res
  }

  /// Renders a parameter list: defaults become default parameters and a
  /// variadic parameter becomes a rest parameter.
  pub(crate) fn render_params(&mut self, args: &Node<Arguments>) -> RenderResult<String> {
    let args = args.stx.as_ref();
    if let Some(first) = args.kwonlyargs.first() {
      return Err(RenderError::unsupported("keyword-only parameters").with_loc(first.loc));
    }
    if let Some(kwarg) = &args.kwarg {
      return Err(RenderError::unsupported("**kwargs parameter").with_loc(kwarg.loc));
    }
    let positional = args.positional().collect_vec();
    // Defaults belong to the last parameters.
    let first_default = positional.len().saturating_sub(args.defaults.len());
    let mut params = Vec::with_capacity(positional.len() + 1);
    for (i, param) in positional.iter().enumerate() {
      let name = &param.stx.arg;
      match i.checked_sub(first_default).and_then(|d| args.defaults.get(d)) {
        Some(default) => params.push(format!("{name} = {}", self.emit_expr(default)?)),
        None => params.push(name.clone()),
      };
    }
    if let Some(vararg) = &args.vararg {
      params.push(format!("...{}", vararg.stx.arg));
    }
    Ok(params.iter().join(LIST_SEP))
  }
}

/// Quotes a string literal. The text is interpolated verbatim; callers
/// that need escaping must sanitize values beforehand.
pub(crate) fn quote(value: &str) -> String {
  format!("\"{value}\"")
}

use bindings::binding_stmt;
use jsbuild_ast::ast::node::Node;
use jsbuild_ast::ast::stmt::Stmt;
use jsbuild_ast::ast::stx::Module;
use render::STMT_SEP;
use serde_json::Value;
use tracing::debug;
use tracing::debug_span;

pub use cache::CacheStats;
pub use err::{RenderError, RenderErrorKind, RenderResult};
pub use render::Renderer;
pub use scope::ScopeStack;

pub mod bindings;
pub mod cache;
pub mod err;
pub mod render;
pub mod scope;
pub mod template;

/// Renders a function body as JavaScript.
///
/// # Arguments
///
/// * `stmts` - The statements of the body, rendered in order.
/// * `declared` - Names already visible to the body, e.g. parameters or
///   initial bindings. Assignments to these never get `var`.
///
/// # Examples
///
/// ```
/// use jsbuild::render_body;
///
/// let module = jsbuild_ast::from_json(r#"{"body": [
///   {"$t": "Assign", "targets": [{"$t": "Name", "id": "a"}], "value": {"$t": "Constant", "value": 10}},
///   {"$t": "Assign", "targets": [{"$t": "Name", "id": "b"}], "value": {"$t": "Name", "id": "a"}}
/// ]}"#).unwrap();
/// let js = render_body(&module.stx.body, ["b"]).unwrap();
/// assert_eq!(js, "var a = 10;\nb = a");
/// ```
pub fn render_body<I, N>(stmts: &[Node<Stmt>], declared: I) -> RenderResult<String>
where
  I: IntoIterator<Item = N>,
  N: Into<String>,
{
  let _span = debug_span!("render_body", statements = stmts.len()).entered();
  let mut renderer = Renderer::with_scopes(ScopeStack::with_declared(declared));
  let out = renderer.render_stmts(stmts)?;
  let stats = renderer.stats();
  debug!(
    computed = stats.computed,
    hits = stats.hits,
    "rendered body"
  );
  Ok(out)
}

/// Settings for [`JsFunction`].
#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
  bindings: Vec<(String, Value)>,
}

impl RenderOptions {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds an initial binding. Bindings are declared in the order they are added.
  pub fn with_binding(mut self, name: impl Into<String>, value: Value) -> Self {
    self.bindings.push((name.into(), value));
    self
  }
}

/// A function body together with the values it closes over.
///
/// The bindings are rendered once, up front, as `var` declarations in a scope
/// of their own; the body then sees every bound name as already declared.
#[derive(Debug)]
pub struct JsFunction {
  module: Node<Module>,
  bound_names: Vec<String>,
  bindings_js: String,
}

impl JsFunction {
  pub fn new(module: Node<Module>, options: RenderOptions) -> RenderResult<JsFunction> {
    let stmts = options
      .bindings
      .iter()
      .map(|(name, value)| binding_stmt(name, value))
      .collect::<Vec<_>>();
    let bindings_js = Renderer::new().render_stmts(&stmts)?;
    let bound_names = options.bindings.into_iter().map(|(name, _)| name).collect();
    Ok(JsFunction {
      module,
      bound_names,
      bindings_js,
    })
  }

  /// The bindings followed by the body.
  pub fn render(&self) -> RenderResult<String> {
    let body = render_body(
      &self.module.stx.body,
      self.bound_names.iter().map(String::as_str),
    )?;
    Ok(match (self.bindings_js.is_empty(), body.is_empty()) {
      (true, _) => body,
      (false, true) => self.bindings_js.clone(),
      (false, false) => format!("{}{STMT_SEP}{body}", self.bindings_js),
    })
  }
}

//! Lexical scopes for deciding between `var x = ...` and `x = ...`.
//!
//! Frames live in a stack-shaped arena and point at their parent by index.
//! Only the current (innermost) frame is ever written to; lookups walk the
//! parent chain. Frames are pushed when rendering enters a function, lambda
//! or loop body and popped when it leaves, so a frame is never shared
//! between sibling bodies.

use ahash::HashSet;
use ahash::HashSetExt;
use tracing::debug;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ScopeId(usize);

#[derive(Debug)]
struct Frame {
  parent: Option<ScopeId>,
  declared: HashSet<String>,
}

#[derive(Debug)]
pub struct ScopeStack {
  frames: Vec<Frame>,
}

impl ScopeStack {
  /// Creates a stack holding only the top-level frame.
  pub fn new() -> ScopeStack {
    ScopeStack {
      frames: vec![Frame {
        parent: None,
        declared: HashSet::new(),
      }],
    }
  }

  /// Creates a top-level frame that already has `names` declared.
  pub fn with_declared<I, N>(names: I) -> ScopeStack
  where
    I: IntoIterator<Item = N>,
    N: Into<String>,
  {
    let mut scopes = ScopeStack::new();
    scopes.declare(names);
    scopes
  }

  pub fn current(&self) -> ScopeId {
    ScopeId(self.frames.len() - 1)
  }

  pub fn depth(&self) -> usize {
    self.frames.len()
  }

  /// Pushes a child of the current frame and makes it current.
  pub fn enter_new(&mut self) -> ScopeId {
    let parent = self.current();
    self.frames.push(Frame {
      parent: Some(parent),
      declared: HashSet::new(),
    });
    debug!(depth = self.depth(), "entered scope");
    self.current()
  }

  /// Discards the current frame. The top-level frame is never popped.
  pub fn exit(&mut self) {
    if self.frames.len() > 1 {
      self.frames.pop();
      debug!(depth = self.depth(), "exited scope");
    }
  }

  /// Declares `names` in the current frame. Declaring a name twice is a no-op.
  pub fn declare<I, N>(&mut self, names: I)
  where
    I: IntoIterator<Item = N>,
    N: Into<String>,
  {
    if let Some(frame) = self.frames.last_mut() {
      frame.declared.extend(names.into_iter().map(Into::into));
    }
  }

  /// Whether `name` is declared in the current frame or any ancestor.
  pub fn contains(&self, name: &str) -> bool {
    let mut next = Some(self.current());
    while let Some(id) = next {
      let frame = &self.frames[id.0];
      if frame.declared.contains(name) {
        return true;
      }
      next = frame.parent;
    }
    false
  }
}

impl Default for ScopeStack {
  fn default() -> Self {
    Self::new()
  }
}

//! Per-pass memo of field renderings.
//!
//! A template may name the same field more than once (the floor-division
//! augmented assignment reads `target` twice), and procedural rules read
//! fields the templates also read. Each `(node, field)` pair is rendered at
//! most once per pass; later reads get the stored text back unchanged.
//!
//! Entries are keyed by node identity (the address of the node's boxed
//! syntax), which is stable because the tree is borrowed immutably for the
//! whole pass. The cache is owned by a single [`Renderer`](crate::Renderer),
//! which clears it at the start of every pass.

use crate::render::field::Field;
use ahash::HashMap;
use ahash::HashMapExt;
use jsbuild_ast::ast::node::Node;
use std::sync::Arc;

/// Identity of a node within one render pass.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeKey(usize);

impl NodeKey {
  pub fn of<S>(node: &Node<S>) -> NodeKey {
    NodeKey(node.stx.as_ref() as *const S as *const () as usize)
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Access {
  Rendered,
  Raw,
}

/// Counters for observing memoization.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct CacheStats {
  /// Field values computed and stored.
  pub computed: usize,
  /// Reads answered from the cache.
  pub hits: usize,
}

#[derive(Debug)]
pub struct AttrCache {
  entries: HashMap<(NodeKey, Field, Access), Arc<str>>,
  stats: CacheStats,
}

impl AttrCache {
  pub fn new() -> AttrCache {
    AttrCache {
      entries: HashMap::new(),
      stats: CacheStats::default(),
    }
  }

  pub fn rendered(&mut self, node: NodeKey, field: Field) -> Option<Arc<str>> {
    self.lookup(node, field, Access::Rendered)
  }

  pub fn raw(&mut self, node: NodeKey, field: Field) -> Option<Arc<str>> {
    self.lookup(node, field, Access::Raw)
  }

  pub fn store_rendered(&mut self, node: NodeKey, field: Field, text: String) -> Arc<str> {
    self.store(node, field, Access::Rendered, text)
  }

  pub fn store_raw(&mut self, node: NodeKey, field: Field, value: &str) -> Arc<str> {
    self.store(node, field, Access::Raw, value.to_string())
  }

  /// Forgets every entry and resets the counters.
  ///
  /// Keys are node addresses, which are only meaningful while the tree they
  /// came from is alive, so a new pass must start from an empty cache.
  pub fn clear(&mut self) {
    self.entries.clear();
    self.stats = CacheStats::default();
  }

  pub fn stats(&self) -> CacheStats {
    self.stats
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  fn lookup(&mut self, node: NodeKey, field: Field, access: Access) -> Option<Arc<str>> {
    let hit = self.entries.get(&(node, field, access)).cloned();
    if hit.is_some() {
      self.stats.hits += 1;
    }
    hit
  }

  fn store(&mut self, node: NodeKey, field: Field, access: Access, text: String) -> Arc<str> {
    self.stats.computed += 1;
    let text: Arc<str> = Arc::from(text);
    // First write wins; a second store for the same key would mean the caller skipped the lookup.
    self
      .entries
      .entry((node, field, access))
      .or_insert(text)
      .clone()
  }
}

impl Default for AttrCache {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::{AttrCache, CacheStats, NodeKey};
  use crate::render::field::Field;
  use jsbuild_ast::ast::expr::{Expr, NameExpr};
  use jsbuild_ast::ast::node::Node;

  fn name(id: &str) -> Node<Expr> {
    Node::synthetic(Expr::Name(NameExpr { id: id.into() }))
  }

  #[test]
  fn test_distinct_nodes_have_distinct_keys() {
    let a = name("a");
    let b = name("a");
    assert_eq!(NodeKey::of(&a), NodeKey::of(&a));
    assert_ne!(NodeKey::of(&a), NodeKey::of(&b));
  }

  #[test]
  fn test_rendered_and_raw_are_separate_entries() {
    let node = name("a");
    let key = NodeKey::of(&node);
    let mut cache = AttrCache::new();
    assert!(cache.rendered(key, Field::Id).is_none());
    cache.store_rendered(key, Field::Id, "\"a\"".to_string());
    assert!(cache.raw(key, Field::Id).is_none());
    cache.store_raw(key, Field::Id, "a");
    assert_eq!(cache.rendered(key, Field::Id).as_deref(), Some("\"a\""));
    assert_eq!(cache.raw(key, Field::Id).as_deref(), Some("a"));
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.stats(), CacheStats {
      computed: 2,
      hits: 2,
    });
  }

  #[test]
  fn test_clear_drops_entries_and_stats() {
    let node = name("a");
    let key = NodeKey::of(&node);
    let mut cache = AttrCache::new();
    cache.store_raw(key, Field::Id, "a");
    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.raw(key, Field::Id).is_none());
    assert_eq!(cache.stats(), CacheStats::default());
  }

  #[test]
  fn test_first_store_wins() {
    let node = name("a");
    let key = NodeKey::of(&node);
    let mut cache = AttrCache::new();
    cache.store_rendered(key, Field::Value, "1".to_string());
    let kept = cache.store_rendered(key, Field::Value, "2".to_string());
    assert_eq!(&*kept, "1");
  }
}

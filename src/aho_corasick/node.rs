use std::hash::Hash;

use rustc_hash::FxHashMap;

pub type NodeId = usize;

/// the root is always the first node created.
pub const ROOT: NodeId = 0;

/// One node per distinct prefix ever inserted.
#[derive(Clone, Debug)]
pub struct Node<T> {
  pub id: NodeId,
  /// index of the last token of this prefix; the root sits before any token
  /// at -1.
  pub depth: isize,
  /// payload; empty means this node does not end a pattern.
  pub value: String,
  pub outgoing: FxHashMap<T, NodeId>,
  /// nodes whose patterns are recognized when this node is the current state.
  pub outputs: Vec<NodeId>,
}

#[allow(clippy::len_without_is_empty)]
impl<T: Eq + Hash> Node<T> {
  pub fn new(id: NodeId, depth: isize) -> Self {
    Node {
      id,
      depth,
      value: String::new(),
      outgoing: FxHashMap::default(),
      outputs: Vec::new(),
    }
  }

  pub fn get_outnode(&self, token: &T) -> Option<NodeId> {
    self.outgoing.get(token).copied()
  }

  pub fn set_outnode(&mut self, token: T, id: NodeId) {
    self.outgoing.insert(token, id);
  }

  pub fn set_value(&mut self, value: &str) {
    self.value.clear();
    self.value.push_str(value);
    self.reset_outputs();
  }

  pub fn has_value(&self) -> bool {
    !self.value.is_empty()
  }

  /// Number of tokens in the prefix this node represents.
  pub fn len(&self) -> usize {
    (self.depth + 1) as usize
  }

  pub fn is_root(&self) -> bool {
    self.depth < 0
  }

  /// Drop inherited outputs, keeping only this node's own membership.
  pub fn reset_outputs(&mut self) {
    self.outputs.clear();
    if self.has_value() {
      self.outputs.push(self.id);
    }
  }
}

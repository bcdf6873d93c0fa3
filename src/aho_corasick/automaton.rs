use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use log::{debug, trace};
use rustc_hash::FxHashSet;

use super::node::{Node, NodeId, ROOT};
use crate::error::{Error, Result};
use crate::matches::{remove_overlaps, Match};

/// Keyword trie plus the failure table and output sets derived from it.
///
/// Patterns can be inserted at any time; the first query after an insertion
/// rebuilds the failure table.
#[derive(Clone, Debug)]
pub struct Automaton<T> {
  nodes: Vec<Node<T>>,
  // failure target per node id, valid only while fresh.
  fail: Vec<NodeId>,
  alphabet: FxHashSet<T>,
  fresh: bool,
}

impl<T: Eq + Hash + Clone> Default for Automaton<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Eq + Hash + Clone> Automaton<T> {
  pub fn new() -> Self {
    Automaton {
      nodes: vec![Node::new(ROOT, -1)],
      fail: vec![ROOT],
      alphabet: FxHashSet::default(),
      fresh: false,
    }
  }

  /// Add `pattern` with payload `value`, reusing any shared prefix.
  ///
  /// Re-inserting a pattern overwrites its value. An empty pattern stores its
  /// value on the root, where it can be looked up but never matches.
  pub fn insert(&mut self, pattern: &[T], value: &str) {
    let mut node_id = ROOT;
    for token in pattern {
      if !self.alphabet.contains(token) {
        self.alphabet.insert(token.clone());
      }
      node_id = match self.nodes[node_id].get_outnode(token) {
        Some(next) => next,
        None => {
          let id = self.nodes.len();
          let depth = self.nodes[node_id].depth + 1;
          self.nodes.push(Node::new(id, depth));
          self.nodes[node_id].set_outnode(token.clone(), id);
          id
        }
      };
    }
    self.nodes[node_id].set_value(value);
    self.fresh = false;
  }

  /// Follow `prefix` from the root.
  pub fn find_node(&self, prefix: &[T]) -> Option<&Node<T>> {
    let mut node_id = ROOT;
    for token in prefix {
      node_id = self.nodes[node_id].get_outnode(token)?;
    }
    Some(&self.nodes[node_id])
  }

  pub fn has_pattern(&self, pattern: &[T]) -> bool {
    self.find_node(pattern).is_some_and(|node| node.has_value())
  }

  /// True when *no* node exists for the exact path `prefix`.
  ///
  /// Despite the name this reports absence. Use [`Automaton::is_prefix`] for
  /// the positive question.
  pub fn has_prefix(&self, prefix: &[T]) -> bool {
    self.find_node(prefix).is_none()
  }

  /// True when `prefix` is a prefix of at least one inserted pattern.
  pub fn is_prefix(&self, prefix: &[T]) -> bool {
    self.find_node(prefix).is_some()
  }

  /// The payload stored for `pattern`, or `""` when it was never inserted.
  pub fn get_value(&self, pattern: &[T]) -> &str {
    self.find_node(pattern).map_or("", |node| node.value.as_str())
  }

  pub fn node(&self, id: NodeId) -> &Node<T> {
    &self.nodes[id]
  }

  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn pattern_count(&self) -> usize {
    self.nodes.iter().filter(|node| node.has_value()).count()
  }

  /// Every distinct token seen in an inserted pattern.
  pub fn alphabet(&self) -> &FxHashSet<T> {
    &self.alphabet
  }

  pub fn is_fresh(&self) -> bool {
    self.fresh
  }

  /// Failure target of node `id`, or `None` while the automaton is stale.
  pub fn fail(&self, id: NodeId) -> Option<NodeId> {
    if !self.fresh {
      return None;
    }
    self.fail.get(id).copied()
  }

  /// Real edge if there is one; the root falls back to itself on any token.
  fn goto(&self, id: NodeId, token: &T) -> Option<NodeId> {
    match self.nodes[id].get_outnode(token) {
      Some(next) => Some(next),
      None if id == ROOT => Some(ROOT),
      None => None,
    }
  }

  /// Recompute the failure table and output sets from the trie.
  ///
  /// Safe to call any number of times; each call starts from the nodes' own
  /// terminal membership.
  pub fn build(&mut self) {
    let mut fail: Vec<NodeId> = vec![ROOT; self.nodes.len()];
    for node in self.nodes.iter_mut() {
      node.reset_outputs();
    }

    // children of the root fail to the root, so the walk starts below them.
    let mut queue: VecDeque<NodeId> = self.nodes[ROOT].outgoing.values().copied().collect();
    let mut resolved: Vec<(NodeId, NodeId)> = Vec::new();

    while let Some(node_id) = queue.pop_front() {
      let node = &self.nodes[node_id];
      trace!("processing node {} depth {} value {:?}", node_id, node.depth, node.value);

      resolved.clear();
      for (token, &dest_id) in node.outgoing.iter() {
        queue.push_back(dest_id);

        // find the deepest proper suffix that can be extended by `token`.
        // the root accepts every token, so this always ends.
        let mut fail_id = fail[node_id];
        let target = loop {
          match self.goto(fail_id, token) {
            Some(target) => break target,
            None => fail_id = fail[fail_id],
          }
        };
        resolved.push((dest_id, target));
      }

      for &(dest_id, target) in resolved.iter() {
        trace!("    node {} fails to {}", dest_id, target);
        fail[dest_id] = target;
        if target == ROOT {
          continue;
        }
        // the target is shallower, so it was resolved earlier in this pass.
        let inherited = self.nodes[target].outputs.clone();
        self.nodes[dest_id].outputs.extend(inherited);
      }
    }

    self.fail = fail;
    self.fresh = true;
    debug!(
      "built automaton: {} nodes, {} patterns, {} tokens",
      self.nodes.len(),
      self.pattern_count(),
      self.alphabet.len()
    );
  }

  /// Advance from `state` over one token, following failure links as needed.
  ///
  /// The automaton must be fresh.
  pub(crate) fn step(&self, mut state: NodeId, token: &T) -> NodeId {
    assert!(self.fresh, "step on a stale automaton");
    loop {
      if let Some(next) = self.goto(state, token) {
        return next;
      }
      state = self.fail[state];
    }
  }

  /// Push a match for every output of `node`, ending at `end`, when `node`
  /// itself ends a pattern. Returns how many were pushed.
  pub(crate) fn emit(&self, node_id: NodeId, end: usize, out: &mut Vec<Match>) -> usize {
    // the empty pattern never produces a match.
    if node_id == ROOT {
      return 0;
    }
    let node = &self.nodes[node_id];
    if !node.has_value() {
      return 0;
    }
    let outputs = &node.outputs;
    for &id in outputs.iter() {
      let node = &self.nodes[id];
      out.push(Match::new(end - node.len(), end, &node.value));
    }
    outputs.len()
  }

  /// All occurrences of all patterns in `text`, rebuilding first if patterns
  /// were inserted since the last build.
  ///
  /// Matches come in scan order; within one position the longest pattern
  /// comes first. With `exclude_overlaps` see [`remove_overlaps`].
  pub fn get_matches(&mut self, text: &[T], exclude_overlaps: bool) -> Vec<Match> {
    if !self.fresh {
      self.build();
    }
    self.collect(text, exclude_overlaps)
  }

  /// Like [`Automaton::get_matches`] but never rebuilds, so it can run behind
  /// a shared reference.
  pub fn try_matches(&self, text: &[T], exclude_overlaps: bool) -> Result<Vec<Match>> {
    if !self.fresh {
      return Err(Error::Stale);
    }
    Ok(self.collect(text, exclude_overlaps))
  }

  fn collect(&self, text: &[T], exclude_overlaps: bool) -> Vec<Match> {
    let mut matches: Vec<Match> = Vec::new();
    let mut state = ROOT;
    for (idx, token) in text.iter().enumerate() {
      state = self.step(state, token);
      let count = self.emit(state, idx + 1, &mut matches);
      if count > 0 {
        trace!("matching pos {} with node {}: {} matches", idx, state, count);
      }
    }
    if exclude_overlaps {
      return remove_overlaps(matches);
    }
    matches
  }

  /// Build if needed and hand the automaton over for shared, read-only use.
  pub fn into_shared(mut self) -> Rc<Self> {
    if !self.fresh {
      self.build();
    }
    Rc::new(self)
  }
}

impl<T: Eq + Hash + Clone + fmt::Debug> Automaton<T> {
  /// Human readable dump of the trie, one node per line, children indented
  /// under their parent in creation order.
  pub fn debug_dump(&self) -> String {
    Dump(self).to_string()
  }
}

struct Dump<'a, T>(&'a Automaton<T>);

impl<T: Eq + Hash + Clone + fmt::Debug> fmt::Display for Dump<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let auto = self.0;
    let mut stack: Vec<(Option<&T>, NodeId, usize)> = vec![(None, ROOT, 0)];

    while let Some((token, id, level)) = stack.pop() {
      let node = &auto.nodes[id];
      write!(f, "{:width$}", "", width = level * 2)?;
      match token {
        Some(token) => write!(f, "{:?} -> #{}", token, id)?,
        None => write!(f, "root #{}", id)?,
      }
      write!(f, " depth {}", node.depth)?;
      if node.has_value() {
        write!(f, " value {:?}", node.value)?;
      }
      if let Some(fail_id) = auto.fail(id) {
        write!(f, " fail #{}", fail_id)?;
      }
      if auto.fresh && !node.outputs.is_empty() {
        write!(f, " outputs {:?}", node.outputs)?;
      }
      writeln!(f)?;

      let mut children: Vec<(&T, NodeId)> = node.outgoing.iter().map(|(t, &c)| (t, c)).collect();
      // reversed so the oldest child is popped first.
      children.sort_by(|a, b| b.1.cmp(&a.1));
      for (token, child) in children {
        stack.push((Some(token), child, level + 1));
      }
    }
    Ok(())
  }
}

use std::hash::Hash;
use std::rc::Rc;

use log::trace;

pub mod automaton;
pub mod context;
pub mod node;

use crate::error::{Error, Result};
use crate::matches::Match;
use automaton::Automaton;
use context::Context;

/// A built automaton paired with the scan state of one input stream.
///
/// Handles made from clones of the same `Rc` share the automaton and keep
/// independent positions.
pub struct AhoCorasick<T> {
  pub automaton: Rc<Automaton<T>>,
  pub context: Context,
}

impl<T: Eq + Hash + Clone> AhoCorasick<T> {
  /// Fails with [`Error::Stale`] if patterns were inserted after the last
  /// build; [`Automaton::into_shared`] always hands over a built automaton.
  pub fn new(automaton: Rc<Automaton<T>>, return_on_first_match: bool) -> Result<Self> {
    if !automaton.is_fresh() {
      return Err(Error::Stale);
    }
    Ok(AhoCorasick {
      automaton,
      context: Context::new(return_on_first_match),
    })
  }

  /// Feed the next chunk of the stream.
  ///
  /// Offsets count from the first token fed since the last reset, so a
  /// pattern split across chunks is reported once the chunk holding its last
  /// token arrives. With `return_on_first_match` this returns after the first
  /// token that produces matches and the rest of the chunk is not consumed;
  /// `context.offset` says how far the stream got.
  pub fn execute(&mut self, chunk: &[T]) -> Vec<Match> {
    let mut found: Vec<Match> = Vec::new();

    for token in chunk.iter() {
      self.context.state = self.automaton.step(self.context.state, token);
      self.context.offset += 1;

      let count = self.automaton.emit(self.context.state, self.context.offset, &mut found);
      if count > 0 {
        trace!("stream offset {} node {}: {} matches", self.context.offset, self.context.state, count);
        if self.context.return_on_first_match {
          return found;
        }
      }
    }

    found
  }

  pub fn reset(&mut self) {
    self.context.reset();
  }
}

impl<T> Clone for AhoCorasick<T> {
  /// The clone shares the automaton but starts a fresh stream.
  fn clone(&self) -> Self {
    AhoCorasick {
      automaton: Rc::clone(&self.automaton),
      context: Context::new(self.context.return_on_first_match),
    }
  }
}

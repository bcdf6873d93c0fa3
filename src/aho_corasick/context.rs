use super::node::{NodeId, ROOT};

/// Scan position of one stream, so matching can resume across chunks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
  // the current state, so this can be called on streaming data
  pub state: NodeId,
  // tokens consumed since the last reset
  pub offset: usize,
  pub return_on_first_match: bool,
}

impl Context {
  pub fn new(return_on_first_match: bool) -> Self {
    Context {
      state: ROOT,
      offset: 0,
      return_on_first_match,
    }
  }

  pub fn reset(&mut self) {
    self.state = ROOT;
    self.offset = 0;
  }
}

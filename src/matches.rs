use std::fmt;

/// One occurrence of a pattern in the scanned tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Match {
  /// index of the first token of the occurrence.
  pub start: usize,
  /// index one past the last token.
  pub end: usize,
  /// the payload the pattern was inserted with.
  pub value: String,
}

impl Match {
  pub fn new(start: usize, end: usize, value: &str) -> Self {
    Match { start, end, value: value.to_string() }
  }

  pub fn len(&self) -> usize {
    self.end - self.start
  }

  pub fn is_empty(&self) -> bool {
    self.end == self.start
  }

  pub fn overlaps(&self, other: &Match) -> bool {
    self.start < other.end && other.start < self.end
  }
}

impl fmt::Display for Match {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}, {}) {}", self.start, self.end, self.value)
  }
}

/// Keep a maximal set of non-overlapping matches, scanning left to right.
///
/// Matches are ordered by end, then start, and a match is kept only when it
/// starts at or after the end of the last kept one. When two matches end at
/// the same token the longer one is considered first. The result is ordered
/// by position.
pub fn remove_overlaps(mut matches: Vec<Match>) -> Vec<Match> {
  matches.sort_by_key(|m| (m.end, m.start));

  let mut kept: Vec<Match> = Vec::with_capacity(matches.len());
  let mut last_end = 0;
  for m in matches {
    if kept.is_empty() || m.start >= last_end {
      last_end = m.end;
      kept.push(m);
    }
  }
  kept
}

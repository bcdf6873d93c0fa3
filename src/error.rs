use std::result;

/// Errors from the checked, read-only entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// patterns were inserted after the last build.
  #[error("automaton is stale; build it before matching through a shared reference")]
  Stale,
}

pub type Result<T> = result::Result<T, Error>;

#![deny(clippy::all)]

//! Aho-Corasick automaton over sequences of arbitrary tokens.
//!
//! Patterns are token sequences (characters, words, symbols; anything `Eq +
//! Hash + Clone`) each bound to a string payload. One linear pass over an
//! input sequence reports every occurrence of every pattern.
//!
//! ```
//! use token_aho_corasick::{Automaton, Match};
//!
//! let mut auto = Automaton::new();
//! for word in ["he", "she", "his", "hers"] {
//!   auto.insert(&word.chars().collect::<Vec<_>>(), &word.to_uppercase());
//! }
//!
//! let text: Vec<char> = "ushers".chars().collect();
//! assert_eq!(auto.get_matches(&text, false), vec![
//!   Match::new(1, 4, "SHE"),
//!   Match::new(2, 4, "HE"),
//!   Match::new(2, 6, "HERS"),
//! ]);
//! assert_eq!(auto.get_matches(&text, true), vec![Match::new(1, 4, "SHE")]);
//! ```

pub mod aho_corasick;
pub mod error;
pub mod matches;

pub use aho_corasick::automaton::Automaton;
pub use aho_corasick::context::Context;
pub use aho_corasick::node::{Node, NodeId, ROOT};
pub use aho_corasick::AhoCorasick;
pub use error::{Error, Result};
pub use matches::{remove_overlaps, Match};

//! Integration tests for pattern insertion, lookup and matching through the
//! public API.

use token_aho_corasick::{AhoCorasick, Automaton, Error, Match};

fn chars(s: &str) -> Vec<char> {
  s.chars().collect()
}

fn words(s: &str) -> Vec<String> {
  s.split_whitespace().map(str::to_string).collect()
}

fn ushers() -> Automaton<char> {
  let mut auto = Automaton::new();
  auto.insert(&chars("he"), "HE");
  auto.insert(&chars("she"), "SHE");
  auto.insert(&chars("his"), "HIS");
  auto.insert(&chars("hers"), "HERS");
  auto
}

#[test]
fn insert_then_lookup() {
  let mut auto = Automaton::new();
  auto.insert(&chars("abc"), "first");

  assert!(auto.has_pattern(&chars("abc")));
  assert_eq!(auto.get_value(&chars("abc")), "first");

  // a prefix is a node but not a pattern.
  assert!(!auto.has_pattern(&chars("ab")));
  assert_eq!(auto.get_value(&chars("ab")), "");
  assert_eq!(auto.get_value(&chars("zzz")), "");
}

#[test]
fn reinsert_overwrites_value() {
  let mut auto = Automaton::new();
  auto.insert(&chars("abc"), "first");
  auto.insert(&chars("abc"), "second");

  assert_eq!(auto.get_value(&chars("abc")), "second");
  assert_eq!(auto.pattern_count(), 1);
  assert_eq!(
    auto.get_matches(&chars("abc"), false),
    vec![Match::new(0, 3, "second")]
  );
}

#[test]
fn has_prefix_reports_absent_paths() {
  let auto = ushers();

  assert!(!auto.has_prefix(&chars("h")));
  assert!(!auto.has_prefix(&chars("he")));
  assert!(!auto.has_prefix(&chars("her")));
  assert!(!auto.has_prefix(&[]));
  assert!(auto.has_prefix(&chars("x")));
  assert!(auto.has_prefix(&chars("herx")));
  assert!(auto.has_prefix(&chars("hersh")));

  assert!(auto.is_prefix(&chars("her")));
  assert!(!auto.is_prefix(&chars("herx")));
}

#[test]
fn finds_overlapping_patterns() {
  let mut auto = ushers();
  let matches = auto.get_matches(&chars("ushers"), false);
  assert_eq!(
    matches,
    vec![
      Match::new(1, 4, "SHE"),
      Match::new(2, 4, "HE"),
      Match::new(2, 6, "HERS"),
    ]
  );
}

#[test]
fn exclude_overlaps_is_disjoint_and_deterministic() {
  let mut auto = ushers();
  let text = chars("ushers his hershe");

  let first = auto.get_matches(&text, true);
  for (i, a) in first.iter().enumerate() {
    for b in first.iter().skip(i + 1) {
      assert!(!a.overlaps(b), "{} overlaps {}", a, b);
    }
  }
  assert_eq!(
    first,
    vec![
      Match::new(1, 4, "SHE"),
      Match::new(7, 10, "HIS"),
      Match::new(11, 13, "HE"),
      Match::new(14, 17, "SHE"),
    ]
  );
  assert_eq!(first, auto.get_matches(&text, true));
}

#[test]
fn empty_text_has_no_matches() {
  let mut auto = ushers();
  assert!(auto.get_matches(&[], false).is_empty());
  assert!(auto.get_matches(&[], true).is_empty());
}

#[test]
fn prefix_patterns_found_independently() {
  let mut auto = Automaton::new();
  auto.insert(&chars("he"), "HE");
  auto.insert(&chars("hers"), "HERS");

  let matches = auto.get_matches(&chars("he hers"), false);
  assert_eq!(
    matches,
    vec![
      Match::new(0, 2, "HE"),
      Match::new(3, 5, "HE"),
      Match::new(3, 7, "HERS"),
    ]
  );
}

#[test]
fn matching_is_idempotent() {
  let mut auto = ushers();
  let text = chars("she sells hers");
  let first = auto.get_matches(&text, false);
  let second = auto.get_matches(&text, false);
  assert_eq!(first, second);
  assert_eq!(first, auto.try_matches(&text, false).unwrap());
}

#[test]
fn insertion_between_queries_rebuilds() {
  let mut auto = ushers();
  let text = chars("ushers");
  assert_eq!(auto.get_matches(&text, false).len(), 3);

  auto.insert(&chars("us"), "US");
  assert!(!auto.is_fresh());
  assert_eq!(auto.try_matches(&text, false), Err(Error::Stale));

  let matches = auto.get_matches(&text, false);
  assert_eq!(matches[0], Match::new(0, 2, "US"));
  assert_eq!(matches.len(), 4);
}

#[test]
fn word_tokens() {
  let mut auto = Automaton::new();
  auto.insert(&words("new york"), "CITY");
  auto.insert(&words("new york times"), "PAPER");
  auto.insert(&words("york"), "YORK");

  let text = words("i read the new york times in new york");
  let matches = auto.get_matches(&text, false);
  assert_eq!(
    matches,
    vec![
      Match::new(3, 5, "CITY"),
      Match::new(4, 5, "YORK"),
      Match::new(3, 6, "PAPER"),
      Match::new(7, 9, "CITY"),
      Match::new(8, 9, "YORK"),
    ]
  );

  let kept = auto.get_matches(&text, true);
  assert_eq!(kept, vec![Match::new(3, 5, "CITY"), Match::new(7, 9, "CITY")]);
}

#[test]
fn integer_tokens_stream_in_chunks() {
  let mut auto: Automaton<u32> = Automaton::new();
  auto.insert(&[1, 2, 3], "one-two-three");
  auto.insert(&[3, 4], "three-four");

  let shared = auto.into_shared();
  let mut aho = AhoCorasick::new(shared, false).unwrap();
  let mut found = Vec::new();
  let chunks: [&[u32]; 3] = [&[0, 1], &[2], &[3, 4, 5]];
  for chunk in chunks {
    found.extend(aho.execute(chunk));
  }
  assert_eq!(
    found,
    vec![
      Match::new(1, 4, "one-two-three"),
      Match::new(3, 5, "three-four"),
    ]
  );
}

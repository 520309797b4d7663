//! File relevance: bag-of-words scoring of source files against journey keywords.
//!
//! Scoring per keyword:
//! - +5 when the lowercased path contains the keyword
//! - +1 per whole-word occurrence in the lowercased "<path> <content>"
//!
//! Word boundaries are ASCII: a non-ASCII letter next to a keyword does not
//! make it part of a longer word.
//!
//! Files scoring 0 are dropped; the rest are ranked by descending score
//! (stable, so ties keep input order) and capped at [`MAX_FILES_INVOLVED`].

use std::collections::BTreeSet;

use regex::Regex;

use crate::types::SourceFile;

/// Upper bound on files linked to one journey.
pub const MAX_FILES_INVOLVED: usize = 20;

/// Path containment bonus per keyword.
const PATH_MATCH_POINTS: u64 = 5;

/// Keywords compiled once into word-boundary patterns.
pub struct KeywordMatcher {
  patterns: Vec<(String, Regex)>,
}

impl KeywordMatcher {
  pub fn new(keywords: &BTreeSet<String>) -> Self {
    let patterns = keywords
      .iter()
      .filter(|kw| !kw.is_empty())
      .map(|kw| {
        let kw = kw.to_lowercase();
        let pattern = format!(r"(?-u:\b){}(?-u:\b)", regex::escape(&kw));
        let re = Regex::new(&pattern).expect("escaped keyword");
        (kw, re)
      })
      .collect();
    Self { patterns }
  }

  /// Relevance score of one file.
  pub fn score(&self, file: &SourceFile) -> u64 {
    let path = file.path.to_lowercase();
    let text = format!("{} {}", path, file.content.to_lowercase());

    self
      .patterns
      .iter()
      .map(|(kw, re)| {
        let path_points = if path.contains(kw.as_str()) {
          PATH_MATCH_POINTS
        } else {
          0
        };
        path_points + re.find_iter(&text).count() as u64
      })
      .sum()
  }
}

/// Relevance score of `file` for `keywords`.
pub fn score_file(keywords: &BTreeSet<String>, file: &SourceFile) -> u64 {
  KeywordMatcher::new(keywords).score(file)
}

/// Files with a positive score, best first, with their scores.
pub fn rank_files<'a>(
  keywords: &BTreeSet<String>,
  files: &'a [SourceFile],
) -> Vec<(&'a SourceFile, u64)> {
  let matcher = KeywordMatcher::new(keywords);
  let mut scored: Vec<(&SourceFile, u64)> = files
    .iter()
    .map(|file| (file, matcher.score(file)))
    .filter(|(_, score)| *score > 0)
    .collect();

  // sort_by is stable: equal scores keep input order.
  scored.sort_by(|a, b| b.1.cmp(&a.1));
  scored.truncate(MAX_FILES_INVOLVED);
  scored
}

/// Top relevant files for `keywords`, best first, at most [`MAX_FILES_INVOLVED`].
pub fn match_files<'a>(keywords: &BTreeSet<String>, files: &'a [SourceFile]) -> Vec<&'a SourceFile> {
  rank_files(keywords, files)
    .into_iter()
    .map(|(file, _)| file)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn file(path: &str, content: &str) -> SourceFile {
    SourceFile {
      path: path.into(),
      content: content.into(),
      size: content.len() as u64,
    }
  }

  fn kws(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
  }

  #[test]
  fn path_match_scores_five_plus_word_hits() {
    // +5 path bonus, +1 for the path token itself, +2 content hits.
    let f = file("src/checkout.ts", "// checkout\nfunction checkout() {}");
    assert_eq!(score_file(&kws(&["checkout"]), &f), 8);
  }

  #[test]
  fn content_match_requires_word_boundaries() {
    let f = file("a.ts", "const logger = login(); // Login LOGIN relogin");
    // "login" as a whole word: "login(", "Login", "LOGIN"; not "relogin".
    assert_eq!(score_file(&kws(&["login"]), &f), 3);
    // "log" never appears as a whole word.
    assert_eq!(score_file(&kws(&["log"]), &f), 0);
  }

  #[test]
  fn non_ascii_letters_are_word_boundaries() {
    let f = file("x.ts", "const ñcart = cartñ;");
    assert_eq!(score_file(&kws(&["cart"]), &f), 2);
    // Unicode case folding does not apply: "ſ" is not "s".
    let f = file("x.ts", "ſession");
    assert_eq!(score_file(&kws(&["session"]), &f), 0);
  }

  #[test]
  fn path_substring_counts_without_word_boundary() {
    let f = file("src/PaymentService.java", "class X {}");
    // Path contains "payment" (+5); "paymentservice" is one word, so no +1.
    assert_eq!(score_file(&kws(&["payment"]), &f), 5);
  }

  #[test]
  fn zero_score_files_are_excluded() {
    let files = vec![file("a.ts", "nothing"), file("b.ts", "cart cart")];
    let matched = match_files(&kws(&["cart"]), &files);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].path, "b.ts");
  }

  #[test]
  fn ranked_descending_with_stable_ties() {
    let files = vec![
      file("one.ts", "cart"),
      file("two.ts", "cart cart cart"),
      file("three.ts", "cart"),
      file("four.ts", "cart cart cart"),
    ];
    let ranked: Vec<&str> = match_files(&kws(&["cart"]), &files)
      .into_iter()
      .map(|f| f.path.as_str())
      .collect();
    assert_eq!(ranked, vec!["two.ts", "four.ts", "one.ts", "three.ts"]);
  }

  #[test]
  fn truncates_to_twenty() {
    let files: Vec<SourceFile> = (0..30)
      .map(|i| file(&format!("f{}.ts", i), &"cart ".repeat(i + 1)))
      .collect();
    let ranked = rank_files(&kws(&["cart"]), &files);
    assert_eq!(ranked.len(), MAX_FILES_INVOLVED);
    assert_eq!(ranked[0].0.path, "f29.ts");
    assert_eq!(ranked[0].1, 30);
    assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
  }

  #[test]
  fn no_keywords_matches_nothing() {
    let files = vec![file("a.ts", "anything")];
    assert!(match_files(&BTreeSet::new(), &files).is_empty());
  }
}

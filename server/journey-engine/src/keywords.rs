//! Keyword extraction from journey text.

use std::collections::BTreeSet;

use crate::types::Journey;

/// Minimum token length (in chars) for a keyword.
const MIN_KEYWORD_LEN: usize = 3;

/// Common words that carry no signal for file matching.
const STOP_WORDS: &[&str] = &[
  "the", "and", "for", "with", "from", "can", "user", "should", "will", "that", "this",
];

/// Significant words of `text`: lowercase `[a-z0-9]` runs of 3+ chars, minus stop words.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
  let cleaned: String = text
    .to_lowercase()
    .chars()
    .map(|c| {
      if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
        c
      } else {
        ' '
      }
    })
    .collect();

  cleaned
    .split_whitespace()
    .filter(|word| word.len() >= MIN_KEYWORD_LEN)
    .filter(|word| !STOP_WORDS.contains(word))
    .map(str::to_string)
    .collect()
}

/// Keywords of a journey's name, description and steps.
pub fn journey_keywords(journey: &Journey) -> BTreeSet<String> {
  extract_keywords(&journey.text())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
  }

  #[test]
  fn empty_text_has_no_keywords() {
    assert!(extract_keywords("").is_empty());
    assert!(extract_keywords("   \n\t ").is_empty());
  }

  #[test]
  fn lowercases_and_splits_on_punctuation() {
    let kws = extract_keywords("Checkout-Flow: PAYMENT_page!");
    assert_eq!(kws, set(&["checkout", "flow", "payment", "page"]));
  }

  #[test]
  fn drops_short_tokens_and_stop_words() {
    let kws = extract_keywords("The user can go to the cart and pay for it with a card");
    assert_eq!(kws, set(&["cart", "pay", "card"]));
  }

  #[test]
  fn deduplicates() {
    let kws = extract_keywords("login LOGIN Login login");
    assert_eq!(kws, set(&["login"]));
  }

  #[test]
  fn keeps_digits() {
    let kws = extract_keywords("oauth2 v10 flow 42");
    assert_eq!(kws, set(&["oauth2", "v10", "flow"]));
  }

  #[test]
  fn non_ascii_letters_become_separators() {
    let kws = extract_keywords("café résumé");
    // "é" is stripped, leaving "caf", "r", "sum".
    assert_eq!(kws, set(&["caf", "sum"]));
  }

  #[test]
  fn journey_keywords_cover_all_fields() {
    let journey = Journey {
      name: "Checkout".into(),
      description: "Purchase items".into(),
      steps: vec!["Open cart".into(), "Confirm order".into()],
    };
    assert_eq!(
      journey_keywords(&journey),
      set(&["checkout", "purchase", "items", "open", "cart", "confirm", "order"])
    );
  }
}

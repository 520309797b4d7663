//! Business value tier from keyword lists matched against journey text.

use crate::types::{BusinessValue, Journey};

const HIGH_VALUE_TERMS: &[&str] = &[
  "payment",
  "checkout",
  "purchase",
  "transaction",
  "revenue",
  "subscription",
  "billing",
  "order",
  "sale",
  "critical",
  "security",
  "authentication",
  "login",
  "signup",
  "register",
  "onboarding",
  "conversion",
  "core",
  "essential",
  "critical path",
];

const MEDIUM_VALUE_TERMS: &[&str] = &[
  "search",
  "filter",
  "browse",
  "view",
  "display",
  "list",
  "notification",
  "settings",
  "profile",
  "edit",
  "update",
  "share",
  "export",
  "report",
  "dashboard",
  "analytics",
];

const LOW_VALUE_TERMS: &[&str] = &[
  "help",
  "documentation",
  "tutorial",
  "tooltip",
  "faq",
  "about",
  "contact",
  "footer",
  "header",
  "navigation",
  "theme",
  "preference",
  "cosmetic",
  "ui enhancement",
];

fn terms_for(value: BusinessValue) -> &'static [&'static str] {
  match value {
    BusinessValue::High => HIGH_VALUE_TERMS,
    BusinessValue::Medium => MEDIUM_VALUE_TERMS,
    BusinessValue::Low => LOW_VALUE_TERMS,
  }
}

/// Terms of `list` contained (as substrings) in the lowercased text, in list order.
fn matched_terms(text: &str, list: &'static [&'static str]) -> Vec<&'static str> {
  list.iter().copied().filter(|term| text.contains(term)).collect()
}

/// Classify a journey: first tier with any matching term wins (high, medium, low).
/// No match at all falls back to medium.
pub fn classify(journey: &Journey) -> BusinessValue {
  let text = journey.text().to_lowercase();
  [BusinessValue::High, BusinessValue::Medium, BusinessValue::Low]
    .into_iter()
    .find(|&tier| terms_for(tier).iter().any(|term| text.contains(term)))
    .unwrap_or(BusinessValue::Medium)
}

/// Human-readable reasoning naming the matched terms of the chosen tier.
pub fn explain(journey: &Journey, value: BusinessValue) -> String {
  let text = journey.text().to_lowercase();
  let matched = matched_terms(&text, terms_for(value)).join(", ");
  match value {
    BusinessValue::High => format!(
      "High business value: Journey involves critical business functions ({})",
      matched
    ),
    BusinessValue::Medium if matched.is_empty() => {
      "Medium business value: Standard user journey without critical business impact".to_string()
    }
    BusinessValue::Medium => format!(
      "Medium business value: Journey involves important user functions ({})",
      matched
    ),
    BusinessValue::Low => format!(
      "Low business value: Journey involves non-critical functions ({})",
      matched
    ),
  }
}

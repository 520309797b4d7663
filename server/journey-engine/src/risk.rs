//! Risk level from the static business value x complexity matrix.

use crate::types::{BusinessValue, Complexity, RiskLevel};

/// Rows: business value (low, medium, high). Columns: complexity (low, medium, high).
const RISK_MATRIX: [[RiskLevel; 3]; 3] = [
  [RiskLevel::Low, RiskLevel::Low, RiskLevel::Medium],
  [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High],
  [RiskLevel::Medium, RiskLevel::High, RiskLevel::Critical],
];

fn value_index(value: BusinessValue) -> usize {
  match value {
    BusinessValue::Low => 0,
    BusinessValue::Medium => 1,
    BusinessValue::High => 2,
  }
}

fn complexity_index(complexity: Complexity) -> usize {
  match complexity {
    Complexity::Low => 0,
    Complexity::Medium => 1,
    Complexity::High => 2,
  }
}

pub fn combine(value: BusinessValue, complexity: Complexity) -> RiskLevel {
  RISK_MATRIX[value_index(value)][complexity_index(complexity)]
}

fn value_impact(value: BusinessValue) -> &'static str {
  match value {
    BusinessValue::High => {
      "This journey has high business value and directly impacts revenue or critical operations."
    }
    BusinessValue::Medium => {
      "This journey has moderate business value and supports important user functions."
    }
    BusinessValue::Low => "This journey has low business value and involves non-critical features.",
  }
}

fn complexity_impact(complexity: Complexity) -> &'static str {
  match complexity {
    Complexity::High => {
      "The high code complexity means changes are risky and bugs are more likely."
    }
    Complexity::Medium => "The moderate complexity requires careful testing when making changes.",
    Complexity::Low => "The low complexity makes this journey relatively safe to modify.",
  }
}

/// "<LEVEL> RISK: <value sentence> <complexity sentence>".
pub fn explain(value: BusinessValue, complexity: Complexity, risk: RiskLevel) -> String {
  format!(
    "{} RISK: {} {}",
    risk.as_str().to_uppercase(),
    value_impact(value),
    complexity_impact(complexity)
  )
}

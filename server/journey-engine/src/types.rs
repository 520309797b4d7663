//! Core types for the journey engine (JSON contracts + derived tiers).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the caller sends)
// ---------------------------------------------------------------------------

/// A named, user-described flow through the product. Unknown fields are
/// ignored; missing ones default to empty so callers can report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub steps: Vec<String>,
}

impl Journey {
  /// Name, description and steps joined by single spaces.
  pub fn text(&self) -> String {
    format!("{} {} {}", self.name, self.description, self.steps.join(" "))
  }
}

/// One file of the repository snapshot. Paths are relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
  pub path: String,
  pub content: String,
  #[serde(default)]
  pub size: u64,
}

/// Stdin contract of the engine binary.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineInput {
  pub files: Vec<SourceFile>,
  pub journeys: Vec<Journey>,
}

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessValue {
  Low,
  Medium,
  High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
  Low,
  Medium,
  High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
  Low,
  Medium,
  High,
  Critical,
}

impl RiskLevel {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Low => "low",
      Self::Medium => "medium",
      Self::High => "high",
      Self::Critical => "critical",
    }
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

/// Heuristic metrics over the files linked to one journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityAnalysis {
  /// Relevance-ranked, at most 20 entries.
  pub files_involved: Vec<String>,
  pub dependencies: Vec<String>,
  pub lines_of_code: u64,
  pub cyclomatic_complexity: u64,
  pub complexity: Complexity,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyRiskAnalysis {
  pub journey: Journey,
  pub business_value: BusinessValue,
  pub complexity: Complexity,
  pub risk_level: RiskLevel,
  pub complexity_analysis: ComplexityAnalysis,
  pub reasoning: String,
}

/// Journey counts per risk bucket; high and critical share `high_risk`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
  pub total_journeys: usize,
  pub high_risk: usize,
  pub medium_risk: usize,
  pub low_risk: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutput {
  pub journey_risks: Vec<JourneyRiskAnalysis>,
  pub summary: AnalysisSummary,
}

//! Orchestration: run the per-journey pipeline and tally the summary.
//!
//! Per journey: classify business value, extract keywords, match files,
//! estimate complexity, combine into a risk level. Journeys share no state,
//! so they are evaluated in parallel; output order follows input order.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::business_value;
use crate::complexity;
use crate::error::EngineError;
use crate::keywords;
use crate::relevance;
use crate::risk;
use crate::types::*;

/// Full risk analysis of one journey against the repository snapshot.
pub fn analyze_journey(journey: &Journey, files: &[SourceFile]) -> JourneyRiskAnalysis {
  let business_value = business_value::classify(journey);
  let value_reasoning = business_value::explain(journey, business_value);

  let keywords = keywords::journey_keywords(journey);
  let matched = relevance::match_files(&keywords, files);
  let complexity_analysis = complexity::estimate(&matched);

  let risk_level = risk::combine(business_value, complexity_analysis.complexity);
  let risk_reasoning = risk::explain(business_value, complexity_analysis.complexity, risk_level);

  debug!(
    journey = %journey.name,
    keywords = keywords.len(),
    files = complexity_analysis.files_involved.len(),
    ?business_value,
    complexity = ?complexity_analysis.complexity,
    risk = risk_level.as_str(),
    "journey analyzed"
  );

  let reasoning = format!(
    "{}\n{}\n\nComplexity Details: {} files involved, {} lines of code, {} dependencies, cyclomatic complexity of {}.",
    value_reasoning,
    risk_reasoning,
    complexity_analysis.files_involved.len(),
    complexity_analysis.lines_of_code,
    complexity_analysis.dependencies.len(),
    complexity_analysis.cyclomatic_complexity,
  );

  JourneyRiskAnalysis {
    journey: journey.clone(),
    business_value,
    complexity: complexity_analysis.complexity,
    risk_level,
    complexity_analysis,
    reasoning,
  }
}

/// Counts per risk bucket (critical folds into high).
pub fn summarize(results: &[JourneyRiskAnalysis]) -> AnalysisSummary {
  results
    .iter()
    .fold(
      AnalysisSummary {
        total_journeys: results.len(),
        ..AnalysisSummary::default()
      },
      |mut summary, result| {
        match result.risk_level {
          RiskLevel::Critical | RiskLevel::High => summary.high_risk += 1,
          RiskLevel::Medium => summary.medium_risk += 1,
          RiskLevel::Low => summary.low_risk += 1,
        }
        summary
      },
    )
}

/// Analyze every journey against `files`.
///
/// Returns `Err` only when the caller broke the contract (no journeys).
pub fn run(files: &[SourceFile], journeys: &[Journey]) -> Result<AnalysisOutput, EngineError> {
  if journeys.is_empty() {
    return Err(EngineError::contract(
      "journeys",
      "must contain at least one journey",
    ));
  }

  info!(
    journeys = journeys.len(),
    files = files.len(),
    "starting journey analysis"
  );

  let journey_risks: Vec<JourneyRiskAnalysis> = journeys
    .par_iter()
    .map(|journey| analyze_journey(journey, files))
    .collect();

  let summary = summarize(&journey_risks);
  info!(
    high = summary.high_risk,
    medium = summary.medium_risk,
    low = summary.low_risk,
    "journey analysis complete"
  );

  Ok(AnalysisOutput {
    journey_risks,
    summary,
  })
}

/// Parse an [`EngineInput`] document, analyze it, and serialize the output.
pub fn run_json(raw: &str) -> Result<String, EngineError> {
  let input: EngineInput = serde_json::from_str(raw)?;
  let out = run(&input.files, &input.journeys)?;
  Ok(serde_json::to_string(&out)?)
}

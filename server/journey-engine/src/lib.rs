//! Journey Risk Engine: rule-based, deterministic; no AI, no DB, no network.
//!
//! Links user journeys to a repository snapshot by keyword relevance,
//! estimates complexity of the linked files, classifies business value and
//! combines both into a risk level. Used by the binary for stdin/stdout and
//! by the HTTP service as a library.

pub mod business_value;
pub mod complexity;
pub mod engine;
pub mod error;
pub mod keywords;
pub mod relevance;
pub mod risk;
pub mod types;

pub use engine::{analyze_journey, run, run_json, summarize};
pub use error::EngineError;
pub use types::{
  AnalysisOutput, AnalysisSummary, BusinessValue, Complexity, ComplexityAnalysis, EngineInput,
  Journey, JourneyRiskAnalysis, RiskLevel, SourceFile,
};

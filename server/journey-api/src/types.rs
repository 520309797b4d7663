//! Request/response types for the HTTP API (JSON contract with the front end).

use journey_engine::{AnalysisSummary, Journey, JourneyRiskAnalysis};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/journey-analyzer/analyze`. Missing fields default to
/// empty so validation can report them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
  #[serde(default)]
  pub github_url: String,
  #[serde(default)]
  pub user_journeys: Vec<Journey>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskOverviewResponse {
  pub github_url: String,
  pub repository_name: String,
  pub analysis_timestamp: String,
  pub journey_risks: Vec<JourneyRiskAnalysis>,
  pub summary: AnalysisSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
  pub status: &'static str,
  pub service: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version: Option<&'static str>,
  pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
  pub health: &'static str,
  pub analyze: &'static str,
  pub analyzer_health: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
  pub name: &'static str,
  pub version: &'static str,
  pub description: &'static str,
  pub endpoints: Endpoints,
}

/// Error body for every failure category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
  pub error: String,
  pub message: String,
}

//! HTTP handlers for the journey analyzer.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::date;
use crate::error::ApiError;
use crate::scanner::ScannedRepository;
use crate::state::AppState;
use crate::types::{
  AnalysisRequest, Endpoints, HealthResponse, RiskOverviewResponse, ServiceInfo,
};
use crate::validate::validate_request;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn root() -> Json<ServiceInfo> {
  Json(ServiceInfo {
    name: "Journey Analyzer API",
    version: VERSION,
    description: "User Journey Risk Analysis API - Analyzes user journeys based on GitHub repositories",
    endpoints: Endpoints {
      health: "GET /health",
      analyze: "POST /api/journey-analyzer/analyze",
      analyzer_health: "GET /api/journey-analyzer/health",
    },
  })
}

pub async fn health() -> Json<HealthResponse> {
  Json(HealthResponse {
    status: "ok",
    service: "journey-analyzer-api",
    version: Some(VERSION),
    timestamp: date::now_iso8601(),
  })
}

pub async fn analyzer_health() -> Json<HealthResponse> {
  Json(HealthResponse {
    status: "ok",
    service: "journey-analyzer",
    version: None,
    timestamp: date::now_iso8601(),
  })
}

pub async fn analyze(
  State(state): State<Arc<AppState>>,
  payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<RiskOverviewResponse>, ApiError> {
  let Json(request) =
    payload.map_err(|e| ApiError::invalid_input("Invalid request", e.body_text()))?;
  validate_request(&request)?;

  info!(
    github_url = %request.github_url,
    journeys = request.user_journeys.len(),
    "received analysis request"
  );

  let ScannedRepository {
    repository_name,
    checkout,
    files,
  } = state.source.acquire(&request.github_url).await?;

  let journeys = request.user_journeys;
  let analysis =
    tokio::task::spawn_blocking(move || journey_engine::run(&files, &journeys)).await;

  // Cleanup runs whether or not the analysis succeeded.
  state.source.cleanup(&checkout).await;

  let output = analysis.map_err(|e| ApiError::internal(e.to_string()))??;

  Ok(Json(RiskOverviewResponse {
    github_url: request.github_url,
    repository_name,
    analysis_timestamp: date::now_iso8601(),
    journey_risks: output.journey_risks,
    summary: output.summary,
  }))
}

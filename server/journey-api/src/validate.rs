//! Request validation at the HTTP boundary (before any acquisition).

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ApiError;
use crate::types::AnalysisRequest;

static GITHUB_REPO_URL: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"github\.com/[^/]+/[^/]+").expect("valid regex literal"));

fn is_blank(s: &str) -> bool {
  s.trim().is_empty()
}

/// Reject requests the engine cannot accept: no URL, non-GitHub URL, no
/// journeys, or a journey missing its name, description or steps.
pub fn validate_request(request: &AnalysisRequest) -> Result<(), ApiError> {
  if is_blank(&request.github_url) || request.user_journeys.is_empty() {
    return Err(ApiError::invalid_input(
      "Invalid request",
      "githubUrl and userJourneys are required",
    ));
  }

  if !GITHUB_REPO_URL.is_match(&request.github_url) {
    return Err(ApiError::invalid_input(
      "Invalid GitHub URL",
      "Please provide a valid GitHub repository URL",
    ));
  }

  for (i, journey) in request.user_journeys.iter().enumerate() {
    let has_step = journey.steps.iter().any(|s| !is_blank(s));
    if is_blank(&journey.name) || is_blank(&journey.description) || !has_step {
      return Err(ApiError::invalid_input(
        "Invalid user journey",
        format!(
          "Each journey must have name, description, and steps (journey #{})",
          i + 1
        ),
      ));
    }
  }

  Ok(())
}

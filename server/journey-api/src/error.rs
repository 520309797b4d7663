//! User-visible error categories and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use journey_engine::EngineError;
use thiserror::Error;
use tracing::{error, warn};

use crate::scanner::AcquireError;
use crate::types::ErrorBody;

#[derive(Debug, Error)]
pub enum ApiError {
  /// Missing or malformed request fields.
  #[error("{title}: {message}")]
  InvalidInput { title: &'static str, message: String },

  /// Repository unreachable, invalid, or failed to clone/scan.
  #[error("acquisition: {0}")]
  Acquisition(#[from] AcquireError),

  /// Unexpected failure while analyzing.
  #[error("internal: {0}")]
  Internal(String),
}

impl ApiError {
  pub fn invalid_input(title: &'static str, message: impl Into<String>) -> Self {
    Self::InvalidInput {
      title,
      message: message.into(),
    }
  }

  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
      Self::Acquisition(_) => StatusCode::BAD_GATEWAY,
      Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  pub fn body(&self) -> ErrorBody {
    match self {
      Self::InvalidInput { title, message } => ErrorBody {
        error: title.to_string(),
        message: message.clone(),
      },
      Self::Acquisition(e) => ErrorBody {
        error: "Repository acquisition failed".to_string(),
        message: format!("Failed to scan repository: {}", e),
      },
      Self::Internal(message) => ErrorBody {
        error: "Analysis failed".to_string(),
        message: message.clone(),
      },
    }
  }
}

impl From<EngineError> for ApiError {
  fn from(e: EngineError) -> Self {
    Self::Internal(e.to_string())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match &self {
      Self::InvalidInput { .. } => {}
      Self::Acquisition(e) => warn!(error = %e, "repository acquisition failed"),
      Self::Internal(e) => error!(error = %e, "error analyzing journeys"),
    }
    (self.status(), Json(self.body())).into_response()
  }
}

//! Structured error types for the journey engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  /// Caller broke the input contract (e.g. no journeys at all).
  #[error("contract: {field}: {reason}")]
  Contract { field: String, reason: String },

  /// Malformed input document, or output that failed to serialize.
  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

impl EngineError {
  pub fn contract(field: &str, reason: &str) -> Self {
    Self::Contract {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }
}

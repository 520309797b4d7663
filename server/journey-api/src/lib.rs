//! Journey Analyzer API
//!
//! HTTP service that validates journey analysis requests, acquires the
//! repository through a [`RepositorySource`], and runs `journey-engine` over
//! the scanned files. Bind to 127.0.0.1 by default.

pub mod config;
pub mod date;
pub mod error;
pub mod handlers;
pub mod scanner;
pub mod state;
pub mod types;
pub mod validate;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::ApiError;
pub use scanner::{AcquireError, GitScanner, RepositorySource, ScannedRepository};
pub use state::AppState;

/// All routes, with permissive CORS and request tracing.
pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/", get(handlers::root))
    .route("/health", get(handlers::health))
    .route("/api/journey-analyzer/health", get(handlers::analyzer_health))
    .route("/api/journey-analyzer/analyze", post(handlers::analyze))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

//! Shared application state.

use std::sync::Arc;

use crate::scanner::RepositorySource;

pub struct AppState {
  pub source: Arc<dyn RepositorySource>,
}

impl AppState {
  pub fn new(source: impl RepositorySource + 'static) -> Self {
    Self {
      source: Arc::new(source),
    }
  }
}

//! Binary entrypoint for the journey analyzer HTTP service.

use std::sync::Arc;

use journey_api::{router, AppState, Config, GitScanner};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("journey_api=info,journey_engine=info,tower_http=info")),
    )
    .with_writer(std::io::stderr)
    .init();

  let config = Config::from_env()?;
  let state = Arc::new(AppState::new(GitScanner::new(&config)));
  let app = router(state);

  info!(
    addr = %config.bind_addr,
    tmp_dir = %config.tmp_dir.display(),
    "journey-analyzer listening on http://{}",
    config.bind_addr
  );

  let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  if tokio::signal::ctrl_c().await.is_ok() {
    info!("shutting down");
  }
}

//! Binary entrypoint: read one JSON object from stdin, write one to stdout.
//!
//! Input is an `EngineInput` ({files, journeys}); output is an `AnalysisOutput`.
//! Logs go to stderr so stdout stays pure JSON.

use journey_engine::{run_json, EngineError};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("journey_engine=warn")),
    )
    .with_writer(io::stderr)
    .init();

  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "journey-engine error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), EngineError> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let json = run_json(&raw)?;
  io::stdout().write_all(json.as_bytes())?;
  Ok(())
}

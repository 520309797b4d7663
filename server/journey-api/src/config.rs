//! Service configuration with sane defaults, overridable from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("config: {key}: invalid value {value:?}")]
  Invalid { key: &'static str, value: String },
}

/// Runtime settings for the HTTP service and repository acquisition.
#[derive(Debug, Clone)]
pub struct Config {
  /// Listen address (`HOST` + `PORT`).
  pub bind_addr: SocketAddr,
  /// Parent directory for shallow clones (`JOURNEY_TMP_DIR`).
  pub tmp_dir: PathBuf,
  /// Upper bound on one `git clone` (`CLONE_TIMEOUT_SECS`).
  pub clone_timeout: Duration,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
      tmp_dir: PathBuf::from(".tmp-repos"),
      clone_timeout: Duration::from_secs(120),
    }
  }
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build from an arbitrary key lookup; unset keys keep their default.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();

    if let Some(host) = lookup("HOST") {
      let ip: IpAddr = host
        .parse()
        .map_err(|_| ConfigError::Invalid { key: "HOST", value: host.clone() })?;
      config.bind_addr.set_ip(ip);
    }
    if let Some(port) = lookup("PORT") {
      let port: u16 = port
        .parse()
        .map_err(|_| ConfigError::Invalid { key: "PORT", value: port.clone() })?;
      config.bind_addr.set_port(port);
    }
    if let Some(dir) = lookup("JOURNEY_TMP_DIR") {
      if dir.trim().is_empty() {
        return Err(ConfigError::Invalid { key: "JOURNEY_TMP_DIR", value: dir });
      }
      config.tmp_dir = PathBuf::from(dir);
    }
    if let Some(secs) = lookup("CLONE_TIMEOUT_SECS") {
      let secs = secs
        .parse::<u64>()
        .ok()
        .filter(|s| *s > 0)
        .ok_or_else(|| ConfigError::Invalid { key: "CLONE_TIMEOUT_SECS", value: secs.clone() })?;
      config.clone_timeout = Duration::from_secs(secs);
    }

    Ok(config)
  }
}

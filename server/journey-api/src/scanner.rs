//! Repository acquisition: shallow-clone a GitHub repository, scan its source
//! files into memory, and remove the checkout afterwards.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use journey_engine::SourceFile;
use regex::Regex;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;

static REPO_NAME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"github\.com/[^/]+/([^/.]+)").expect("valid regex literal"));

/// Entries never descended into (or read).
const SKIPPED_NAMES: &[&str] = &[".git", "node_modules", "dist", "build"];

const SOURCE_EXTENSIONS: &[&str] = &[
  ".js", ".jsx", ".ts", ".tsx", ".py", ".java", ".go", ".rs", ".c", ".cpp", ".cs", ".rb", ".php",
  ".swift", ".kt", ".vue", ".svelte", ".html", ".css", ".scss", ".graphql",
];

#[derive(Debug, Error)]
pub enum AcquireError {
  #[error("Invalid GitHub URL format: {0}")]
  InvalidLocator(String),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("git clone exited with {status}: {stderr}")]
  CloneFailed { status: String, stderr: String },

  #[error("git clone timed out after {0:?}")]
  Timeout(Duration),
}

/// Materialized repository snapshot handed to the engine.
#[derive(Debug, Clone)]
pub struct ScannedRepository {
  pub repository_name: String,
  /// Working copy owned by this acquisition alone.
  pub checkout: PathBuf,
  pub files: Vec<SourceFile>,
}

/// Source of repository snapshots. Cleanup is keyed by the checkout returned
/// from `acquire`, so concurrent requests for the same repository never share one.
#[async_trait]
pub trait RepositorySource: Send + Sync {
  async fn acquire(&self, locator: &str) -> Result<ScannedRepository, AcquireError>;

  /// Best-effort; failures are logged, never returned.
  async fn cleanup(&self, checkout: &Path);
}

/// Repository name (`<repo>` of `github.com/<owner>/<repo>`), without `.git`.
pub fn repository_name(locator: &str) -> Result<String, AcquireError> {
  REPO_NAME
    .captures(locator)
    .and_then(|caps| caps.get(1))
    .map(|m| m.as_str().to_string())
    .ok_or_else(|| AcquireError::InvalidLocator(locator.to_string()))
}

pub fn is_source_file(file_name: &str) -> bool {
  SOURCE_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
}

fn is_skipped(entry: &DirEntry) -> bool {
  entry.depth() > 0
    && entry
      .file_name()
      .to_str()
      .map(|name| SKIPPED_NAMES.contains(&name))
      .unwrap_or(false)
}

/// Relative path with `/` separators.
fn relative_path(root: &Path, path: &Path) -> String {
  path
    .strip_prefix(root)
    .unwrap_or(path)
    .components()
    .map(|c| c.as_os_str().to_string_lossy())
    .collect::<Vec<_>>()
    .join("/")
}

/// Read every source file under `root`. Files that are not valid UTF-8 are skipped.
pub fn scan_directory(root: &Path) -> Result<Vec<SourceFile>, AcquireError> {
  let mut files = Vec::new();

  let walker = WalkDir::new(root)
    .sort_by_file_name()
    .into_iter()
    .filter_entry(|entry| !is_skipped(entry));

  for entry in walker {
    let entry = entry.map_err(std::io::Error::from)?;
    if !entry.file_type().is_file() {
      continue;
    }
    let is_source = entry
      .file_name()
      .to_str()
      .map(is_source_file)
      .unwrap_or(false);
    if !is_source {
      continue;
    }

    match std::fs::read_to_string(entry.path()) {
      Ok(content) => {
        let size = entry
          .metadata()
          .map(|m| m.len())
          .unwrap_or(content.len() as u64);
        files.push(SourceFile {
          path: relative_path(root, entry.path()),
          content,
          size,
        });
      }
      Err(e) => {
        warn!(path = %entry.path().display(), error = %e, "could not read file, skipping");
      }
    }
  }

  Ok(files)
}

/// Shallow `git clone` into a fresh `<tmp_dir>/<repo>-XXXXXX`, then scan.
pub struct GitScanner {
  tmp_dir: PathBuf,
  clone_timeout: Duration,
}

impl GitScanner {
  pub fn new(config: &Config) -> Self {
    Self {
      tmp_dir: config.tmp_dir.clone(),
      clone_timeout: config.clone_timeout,
    }
  }

  /// Create an empty, uniquely named directory for one clone.
  fn create_checkout(&self, repository_name: &str) -> Result<PathBuf, AcquireError> {
    std::fs::create_dir_all(&self.tmp_dir)?;
    let dir = tempfile::Builder::new()
      .prefix(&format!("{}-", repository_name))
      .tempdir_in(&self.tmp_dir)?;
    Ok(dir.keep())
  }

  async fn clone_into(&self, locator: &str, checkout: &Path) -> Result<(), AcquireError> {
    let mut cmd = Command::new("git");
    cmd
      .arg("clone")
      .arg("--depth")
      .arg("1")
      .arg("--")
      .arg(locator)
      .arg(checkout)
      .kill_on_drop(true);

    let output = tokio::time::timeout(self.clone_timeout, cmd.output())
      .await
      .map_err(|_| AcquireError::Timeout(self.clone_timeout))??;

    if !output.status.success() {
      return Err(AcquireError::CloneFailed {
        status: output.status.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
      });
    }
    Ok(())
  }
}

#[async_trait]
impl RepositorySource for GitScanner {
  async fn acquire(&self, locator: &str) -> Result<ScannedRepository, AcquireError> {
    let repository_name = repository_name(locator)?;
    let checkout = self.create_checkout(&repository_name)?;

    info!(%locator, checkout = %checkout.display(), "cloning repository");
    if let Err(e) = self.clone_into(locator, &checkout).await {
      // A failed or timed-out clone can leave a partial checkout behind.
      self.cleanup(&checkout).await;
      return Err(e);
    }

    let root = checkout.clone();
    let scanned = tokio::task::spawn_blocking(move || scan_directory(&root))
      .await
      .map_err(std::io::Error::other)?;
    let files = match scanned {
      Ok(files) => files,
      Err(e) => {
        self.cleanup(&checkout).await;
        return Err(e);
      }
    };

    info!(
      repository = %repository_name,
      files = files.len(),
      "scanned repository"
    );
    Ok(ScannedRepository {
      repository_name,
      checkout,
      files,
    })
  }

  async fn cleanup(&self, checkout: &Path) {
    if checkout == self.tmp_dir || !checkout.starts_with(&self.tmp_dir) {
      warn!(checkout = %checkout.display(), "refusing to remove path outside the clone directory");
      return;
    }
    match tokio::fs::remove_dir_all(checkout).await {
      Ok(()) => debug!(checkout = %checkout.display(), "removed checkout"),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
      Err(e) => warn!(
        checkout = %checkout.display(),
        error = %e,
        "could not clean up checkout"
      ),
    }
  }
}

//! Output artifacts: full-file writes followed by a size check on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{DistError, Result};

/// A file written by the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputArtifact {
  pub path: PathBuf,
  /// Size in bytes as reported by the filesystem after the write.
  pub size: u64,
}

impl OutputArtifact {
  /// File name for display, falling back to the full path.
  pub fn file_name(&self) -> String {
    self
      .path
      .file_name()
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_else(|| self.path.display().to_string())
  }
}

/// Replace the file at `path` with `content`, then stat it.
///
/// The write completes and the file is closed before its size is read, so
/// the reported size is what is actually on disk.
pub fn write_artifact(path: &Path, content: &str) -> Result<OutputArtifact> {
  fs::write(path, content).map_err(|e| DistError::WriteFile {
    path: path.to_path_buf(),
    source: e,
  })?;

  let size = file_size(path)?;
  info!(path = %path.display(), size, "wrote artifact");

  Ok(OutputArtifact {
    path: path.to_path_buf(),
    size,
  })
}

/// Size in bytes of the file at `path`.
pub fn file_size(path: &Path) -> Result<u64> {
  fs::metadata(path).map(|m| m.len()).map_err(|e| DistError::Stat {
    path: path.to_path_buf(),
    source: e,
  })
}

/// Create `dir` and its parents if missing.
pub fn ensure_dir(dir: &Path) -> Result<()> {
  if dir.is_dir() {
    return Ok(());
  }
  fs::create_dir_all(dir).map_err(|e| DistError::CreateDir {
    path: dir.to_path_buf(),
    source: e,
  })?;
  info!(path = %dir.display(), "created output directory");
  Ok(())
}

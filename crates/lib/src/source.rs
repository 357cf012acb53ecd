//! Source artifacts: the two input scripts read once per build.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DistError, Result};

/// An input script as read from disk. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceArtifact {
  pub path: PathBuf,
  pub content: String,
}

/// Read the source file at `path`.
///
/// # Errors
///
/// Returns [`DistError::MissingSource`] if the file does not exist and
/// [`DistError::ReadSource`] if it cannot be read as UTF-8 text.
pub fn load(path: &Path) -> Result<SourceArtifact> {
  let content = fs::read_to_string(path).map_err(|e| {
    if e.kind() == io::ErrorKind::NotFound {
      DistError::MissingSource {
        path: path.to_path_buf(),
      }
    } else {
      DistError::ReadSource {
        path: path.to_path_buf(),
        source: e,
      }
    }
  })?;

  debug!(path = %path.display(), bytes = content.len(), "loaded source");

  Ok(SourceArtifact {
    path: path.to_path_buf(),
    content,
  })
}

//! Errors raised while assembling the distribution.

use std::path::PathBuf;

use thiserror::Error;

use crate::minify::MinifyError;

/// Errors that can occur during a distribution build.
///
/// Every variant is fatal: the build stops at the first error and leaves
/// whatever was already written on disk untouched.
#[derive(Debug, Error)]
pub enum DistError {
  /// A required source file does not exist.
  #[error("{} not found", path.display())]
  MissingSource { path: PathBuf },

  /// A source file exists but could not be read as UTF-8 text.
  #[error("failed to read {}: {source}", path.display())]
  ReadSource { path: PathBuf, source: std::io::Error },

  /// The minifier rejected the configuration script.
  #[error("failed to minify {}: {source}", path.display())]
  Minify { path: PathBuf, source: MinifyError },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error("failed to write file {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: std::io::Error },

  #[error("failed to stat file {}: {source}", path.display())]
  Stat { path: PathBuf, source: std::io::Error },
}

impl DistError {
  /// Whether this error reports a missing input file.
  pub fn is_missing_source(&self) -> bool {
    matches!(self, DistError::MissingSource { .. })
  }
}

pub type Result<T, E = DistError> = std::result::Result<T, E>;

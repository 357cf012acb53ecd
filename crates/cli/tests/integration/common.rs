//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// Read fixture content.
pub fn fixture_content(name: &str) -> String {
  std::fs::read_to_string(fixture_path(name)).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Isolated project root.
///
/// Each test gets its own temporary directory acting as the project root.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Create a project root holding both fixture sources.
  pub fn with_sources() -> Self {
    let env = Self::empty();
    env.write_file("tailwind.js", &fixture_content("tailwind.js"));
    env.write_file("tailwind-config.js", &fixture_content("tailwind-config.js"));
    env
  }

  /// Create an empty project root.
  pub fn empty() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Write a file relative to the project root.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.temp.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  /// Read a file from the output directory.
  pub fn read_output(&self, name: &str) -> String {
    std::fs::read_to_string(self.output_path().join(name)).unwrap()
  }

  /// Output directory of the distribution.
  pub fn output_path(&self) -> PathBuf {
    self.temp.path().join("dist").join("skycms")
  }

  /// Command running skydist with the project root as working directory.
  pub fn skydist_cmd(&self) -> Command {
    let mut cmd = cargo_bin_cmd!("skydist");
    cmd.current_dir(self.temp.path()).env_remove("RUST_LOG");
    cmd
  }
}

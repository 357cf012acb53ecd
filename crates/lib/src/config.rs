//! Build configuration: where sources are read from and where outputs go.
//!
//! All paths are fixed relative to a project root. [`DistConfig::default`]
//! uses the current directory as root; [`DistConfig::with_root`] rebases
//! the same layout elsewhere.

use std::path::PathBuf;

/// Runtime script consumed verbatim.
pub const RUNTIME_SOURCE: &str = "tailwind.js";

/// Theme configuration script consumed through the minifier.
pub const CONFIG_SOURCE: &str = "tailwind-config.js";

/// Output directory relative to the project root.
pub const OUTPUT_DIR: &str = "dist/skycms";

pub const RUNTIME_OUTPUT: &str = "tailwind-runtime.js";
pub const CONFIG_OUTPUT: &str = "tailwind-config.js";
pub const BUNDLE_OUTPUT: &str = "tailwind-bundle.js";
pub const README_OUTPUT: &str = "README.md";
pub const EXAMPLE_OUTPUT: &str = "example-template.html";

/// Location of the two source files and the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistConfig {
  /// Project root all other paths are relative to.
  pub root: PathBuf,
  pub runtime_source: PathBuf,
  pub config_source: PathBuf,
  pub output_dir: PathBuf,
}

impl Default for DistConfig {
  fn default() -> Self {
    Self::with_root(".")
  }
}

impl DistConfig {
  /// Build the standard layout under `root`.
  pub fn with_root(root: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      runtime_source: PathBuf::from(RUNTIME_SOURCE),
      config_source: PathBuf::from(CONFIG_SOURCE),
      output_dir: PathBuf::from(OUTPUT_DIR),
    }
  }

  pub fn runtime_source_path(&self) -> PathBuf {
    self.root.join(&self.runtime_source)
  }

  pub fn config_source_path(&self) -> PathBuf {
    self.root.join(&self.config_source)
  }

  /// Resolve every output path under the configured output directory.
  pub fn layout(&self) -> Layout {
    Layout::new(self.root.join(&self.output_dir))
  }
}

/// Resolved output paths for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
  pub dir: PathBuf,
  pub runtime: PathBuf,
  pub config: PathBuf,
  pub bundle: PathBuf,
  pub readme: PathBuf,
  pub example: PathBuf,
}

impl Layout {
  pub fn new(dir: PathBuf) -> Self {
    Self {
      runtime: dir.join(RUNTIME_OUTPUT),
      config: dir.join(CONFIG_OUTPUT),
      bundle: dir.join(BUNDLE_OUTPUT),
      readme: dir.join(README_OUTPUT),
      example: dir.join(EXAMPLE_OUTPUT),
      dir,
    }
  }
}

//! Whole-distribution build.
//!
//! Order of operations:
//!
//! 1. Load both sources (a missing one aborts before anything is written)
//! 2. Create the output directory
//! 3. Runtime, then configuration, then bundle (from the minified text)
//! 4. Stat the three outputs and write the README
//! 5. Write the example page

use std::path::PathBuf;
use std::time::SystemTime;

use serde::Serialize;
use tracing::info;

use crate::artifact::{OutputArtifact, ensure_dir};
use crate::assemble::{assemble_bundle, assemble_config, assemble_runtime};
use crate::banner::format_timestamp;
use crate::config::DistConfig;
use crate::error::Result;
use crate::minify::MinifyOptions;
use crate::report::{ReportSizes, write_example, write_readme};
use crate::source;

/// Options for a single build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
  /// Timestamp embedded in banners and the README.
  pub generated_at: SystemTime,
  pub minify: MinifyOptions,
}

impl Default for BuildOptions {
  fn default() -> Self {
    Self {
      generated_at: SystemTime::now(),
      minify: MinifyOptions::default(),
    }
  }
}

/// Result of a successful build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
  /// RFC 3339 timestamp written into every banner.
  pub generated_at: String,
  pub output_dir: PathBuf,
  pub runtime: OutputArtifact,
  pub config: OutputArtifact,
  pub bundle: OutputArtifact,
  /// Sizes as listed in the README table.
  pub sizes: ReportSizes,
  pub readme: PathBuf,
  pub example: PathBuf,
}

/// Build the distribution described by `config`.
///
/// # Errors
///
/// Fails on the first error. A missing source leaves the output directory
/// untouched; later failures leave already written files in place.
pub fn build(config: &DistConfig, options: &BuildOptions) -> Result<BuildReport> {
  let generated_at = format_timestamp(options.generated_at);
  let layout = config.layout();

  info!(root = %config.root.display(), "building distribution");

  let runtime_source = source::load(&config.runtime_source_path())?;
  let config_source = source::load(&config.config_source_path())?;

  ensure_dir(&layout.dir)?;

  let runtime = assemble_runtime(&runtime_source, &layout, &generated_at)?;
  let (config_artifact, minified) = assemble_config(&config_source, &layout, &generated_at, &options.minify)?;
  let bundle = assemble_bundle(&runtime_source.content, &minified, &layout, &generated_at)?;

  let (readme, sizes) = write_readme(&layout, &generated_at)?;
  let example = write_example(&layout)?;

  info!(
    runtime = sizes.runtime,
    config = sizes.config,
    bundle = sizes.bundle,
    "build complete"
  );

  Ok(BuildReport {
    generated_at,
    output_dir: layout.dir,
    runtime,
    config: config_artifact,
    bundle,
    sizes,
    readme,
    example,
  })
}

//! The three primary outputs: runtime, configuration and bundle.
//!
//! `assemble_runtime` and `assemble_config` are independent of each other.
//! `assemble_bundle` takes the minified text returned by `assemble_config`
//! so the bundle always carries exactly what `tailwind-config.js` carries.

use tracing::debug;

use crate::artifact::{OutputArtifact, write_artifact};
use crate::banner::{BannerKind, render_banner};
use crate::config::Layout;
use crate::error::{DistError, Result};
use crate::minify::{MinifyOptions, minify};
use crate::source::SourceArtifact;

/// Placed between the runtime and the minified configuration in the bundle.
pub const BUNDLE_SEPARATOR: &str = "\n\n";

/// Write the runtime verbatim behind its banner.
pub fn assemble_runtime(source: &SourceArtifact, layout: &Layout, generated: &str) -> Result<OutputArtifact> {
  let content = render_banner(BannerKind::Runtime, generated) + &source.content;
  write_artifact(&layout.runtime, &content)
}

/// Minify the configuration script and write it behind its banner.
///
/// Returns the written artifact together with the minified text (without
/// banner) for use by [`assemble_bundle`].
///
/// # Errors
///
/// Returns [`DistError::Minify`] if the script cannot be minified; nothing
/// is written in that case.
pub fn assemble_config(
  source: &SourceArtifact,
  layout: &Layout,
  generated: &str,
  options: &MinifyOptions,
) -> Result<(OutputArtifact, String)> {
  let minified = minify(&source.content, options).map_err(|e| DistError::Minify {
    path: source.path.clone(),
    source: e,
  })?;
  debug!(
    original = source.content.len(),
    minified = minified.len(),
    "minified configuration"
  );

  let content = render_banner(BannerKind::Config, generated) + &minified;
  let artifact = write_artifact(&layout.config, &content)?;
  Ok((artifact, minified))
}

/// Concatenate runtime and minified configuration behind the bundle banner.
pub fn assemble_bundle(runtime: &str, minified_config: &str, layout: &Layout, generated: &str) -> Result<OutputArtifact> {
  let banner = render_banner(BannerKind::Bundle, generated);
  let mut content = String::with_capacity(banner.len() + runtime.len() + BUNDLE_SEPARATOR.len() + minified_config.len());
  content.push_str(&banner);
  content.push_str(runtime);
  content.push_str(BUNDLE_SEPARATOR);
  content.push_str(minified_config);
  write_artifact(&layout.bundle, &content)
}

//! Documentation artifacts: the distribution README and the example page.

use std::path::PathBuf;

use serde::Serialize;

use crate::artifact::{file_size, write_artifact};
use crate::config::Layout;
use crate::error::Result;
use crate::templates::{EXAMPLE_TEMPLATE_HTML, README_TEMPLATE};

/// On-disk sizes of the three primary outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSizes {
  pub runtime: u64,
  pub config: u64,
  pub bundle: u64,
}

impl ReportSizes {
  /// Stat the three outputs of `layout`.
  ///
  /// Must run after the outputs were written; sizes are never taken from
  /// in-memory buffers.
  pub fn from_disk(layout: &Layout) -> Result<Self> {
    Ok(Self {
      runtime: file_size(&layout.runtime)?,
      config: file_size(&layout.config)?,
      bundle: file_size(&layout.bundle)?,
    })
  }
}

/// Size in kibibytes with two decimals, e.g. `398.12 KB`.
pub fn format_kb(bytes: u64) -> String {
  format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Size cell of the README table: kibibytes plus the exact byte count.
fn size_cell(bytes: u64) -> String {
  format!("{} ({} bytes)", format_kb(bytes), bytes)
}

/// Render the README for the given sizes.
pub fn render_readme(sizes: &ReportSizes, generated: &str) -> String {
  README_TEMPLATE
    .replace("{generated}", generated)
    .replace("{runtime_size}", &size_cell(sizes.runtime))
    .replace("{config_size}", &size_cell(sizes.config))
    .replace("{bundle_size}", &size_cell(sizes.bundle))
}

/// Stat the outputs, then write `README.md`.
pub fn write_readme(layout: &Layout, generated: &str) -> Result<(PathBuf, ReportSizes)> {
  let sizes = ReportSizes::from_disk(layout)?;
  write_artifact(&layout.readme, &render_readme(&sizes, generated))?;
  Ok((layout.readme.clone(), sizes))
}

/// Write the static `example-template.html`.
pub fn write_example(layout: &Layout) -> Result<PathBuf> {
  write_artifact(&layout.example, EXAMPLE_TEMPLATE_HTML)?;
  Ok(layout.example.clone())
}

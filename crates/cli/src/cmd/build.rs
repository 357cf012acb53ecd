//! Implementation of the `skydist` build.
//!
//! Runs the distribution pipeline for a project root and prints a summary of
//! what was written, either as text or as JSON.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};

use skydist_lib::report::format_kb;
use skydist_lib::{BuildOptions, BuildReport, DistConfig, build};

use crate::output::{OutputFormat, format_duration, print_heading, print_info, print_json, print_stat, print_success, symbols};

/// Execute the build.
///
/// # Errors
///
/// Returns an error if a source file is missing, the configuration cannot be
/// minified, or an output cannot be written.
pub fn cmd_build(root: &Path, format: OutputFormat) -> Result<()> {
  let start = Instant::now();
  let root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
  let config = DistConfig::with_root(&root);

  if !format.is_json() {
    print_heading("Building SkyCMS Tailwind distribution");
    println!();
  }

  let report = build(&config, &BuildOptions::default()).context("Build failed")?;

  if format.is_json() {
    return print_json(&report);
  }

  print_report(&report);
  println!();
  print_heading(&format!("Build complete in {}", format_duration(start.elapsed())));
  print_next_steps();

  Ok(())
}

fn print_report(report: &BuildReport) {
  print_success(&format!(
    "Copied Tailwind runtime: {} ({})",
    report.runtime.file_name(),
    format_kb(report.runtime.size)
  ));
  print_success(&format!(
    "Minified configuration: {} ({})",
    report.config.file_name(),
    format_kb(report.config.size)
  ));
  print_success(&format!(
    "Created bundle: {} ({})",
    report.bundle.file_name(),
    format_kb(report.bundle.size)
  ));
  print_success("Created README.md");
  print_success("Created example-template.html");

  println!();
  print_stat("Output directory", &report.output_dir.display().to_string());
  print_stat("Generated", &report.generated_at);
}

fn print_next_steps() {
  println!();
  print_info("Next steps:");
  for step in [
    "Deploy dist/skycms/ to your web server",
    "Use example-template.html as your SkyCMS page template",
    "Configure cache headers (see README.md)",
  ] {
    println!(
      "  {} {}",
      symbols::ARROW.if_supports_color(Stream::Stdout, |s| s.dimmed()),
      step
    );
  }
}

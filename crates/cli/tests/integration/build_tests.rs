//! Build command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

const OUTPUTS: [&str; 5] = [
  "tailwind-runtime.js",
  "tailwind-config.js",
  "tailwind-bundle.js",
  "README.md",
  "example-template.html",
];

#[test]
fn build_in_current_dir() {
  let env = TestEnv::with_sources();

  env
    .skydist_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("Copied Tailwind runtime: tailwind-runtime.js"))
    .stdout(predicate::str::contains("Minified configuration: tailwind-config.js"))
    .stdout(predicate::str::contains("Created bundle: tailwind-bundle.js"))
    .stdout(predicate::str::contains("Build complete"));

  for name in OUTPUTS {
    assert!(env.output_path().join(name).exists(), "{} should exist", name);
  }
}

#[test]
fn build_with_explicit_root() {
  let env = TestEnv::with_sources();
  let elsewhere = TestEnv::empty();

  elsewhere
    .skydist_cmd()
    .arg(env.temp.path())
    .assert()
    .success();

  assert!(env.output_path().join("tailwind-bundle.js").exists());
  assert!(!elsewhere.output_path().exists());
}

#[test]
fn bundle_contains_runtime_and_minified_config() {
  let env = TestEnv::with_sources();

  env.skydist_cmd().assert().success();

  let runtime = env.read_output("tailwind-runtime.js");
  let config = env.read_output("tailwind-config.js");
  let bundle = env.read_output("tailwind-bundle.js");

  assert!(runtime.starts_with("/**\n"));
  assert!(config.contains("tailwind.config={"));
  assert!(!config.contains("// "));
  let minified = config.rsplit(" */\n\n").next().unwrap();
  assert!(bundle.ends_with(&format!("\n\n{}", minified)));
}

#[test]
fn json_summary_lists_sizes() {
  let env = TestEnv::with_sources();

  let output = env.skydist_cmd().args(["--format", "json"]).output().unwrap();
  assert!(output.status.success());

  let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  let bundle_size = std::fs::metadata(env.output_path().join("tailwind-bundle.js"))
    .unwrap()
    .len();
  assert_eq!(report["sizes"]["bundle"], bundle_size);
  assert_eq!(report["bundle"]["size"], bundle_size);
  assert!(report["generated_at"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn missing_config_source_fails() {
  let env = TestEnv::empty();
  env.write_file("tailwind.js", "/* runtime */");

  env
    .skydist_cmd()
    .assert()
    .failure()
    .stderr(predicate::str::contains("tailwind-config.js not found"));

  assert!(!env.output_path().exists());
}

#[test]
fn malformed_config_fails() {
  let env = TestEnv::empty();
  env.write_file("tailwind.js", "/* runtime */");
  env.write_file("tailwind-config.js", "tailwind.config = { theme: {} } }");

  env
    .skydist_cmd()
    .assert()
    .failure()
    .stderr(predicate::str::contains("tailwind-config.js"));

  assert!(!env.output_path().join("README.md").exists());
}

#[test]
fn verbose_logs_to_stderr() {
  let env = TestEnv::with_sources();

  env
    .skydist_cmd()
    .arg("--verbose")
    .assert()
    .success()
    .stderr(predicate::str::contains("wrote artifact"));
}

mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::output::{OutputFormat, print_error};

/// skydist - SkyCMS Tailwind CSS distribution builder
#[derive(Parser)]
#[command(name = "skydist")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Project root containing tailwind.js and tailwind-config.js
  #[arg(default_value = ".")]
  root: PathBuf,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,

  /// Output format for the build summary
  #[arg(long, value_enum, default_value_t)]
  format: OutputFormat,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cmd::cmd_build(&cli.root, cli.format) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&format!("{:#}", err));
      ExitCode::FAILURE
    }
  }
}

//! skydist-lib: assembles the SkyCMS Tailwind distribution
//!
//! This crate turns two source scripts into a deployable directory:
//! - `tailwind-runtime.js`: the runtime, verbatim, behind a banner
//! - `tailwind-config.js`: the theme configuration, minified, behind a banner
//! - `tailwind-bundle.js`: runtime and minified configuration in one file
//! - `README.md` and `example-template.html`: deployment documentation
//!
//! [`build::build`] runs the whole pipeline; the individual steps live in
//! [`assemble`] and [`report`].

pub mod artifact;
pub mod assemble;
pub mod banner;
pub mod build;
pub mod config;
pub mod error;
pub mod minify;
pub mod report;
pub mod source;
pub mod templates;

pub use build::{BuildOptions, BuildReport, build};
pub use config::DistConfig;
pub use error::DistError;

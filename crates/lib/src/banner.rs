//! Documentation banners prepended to each output script.

use std::time::SystemTime;

use crate::templates::{BUNDLE_BANNER, CONFIG_BANNER, RUNTIME_BANNER};

/// Which output a banner belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
  Runtime,
  Config,
  Bundle,
}

impl BannerKind {
  fn template(self) -> &'static str {
    match self {
      BannerKind::Runtime => RUNTIME_BANNER,
      BannerKind::Config => CONFIG_BANNER,
      BannerKind::Bundle => BUNDLE_BANNER,
    }
  }
}

/// Format a build timestamp as RFC 3339 UTC with millisecond precision,
/// e.g. `2026-01-15T16:11:56.113Z`.
pub fn format_timestamp(time: SystemTime) -> String {
  humantime::format_rfc3339_millis(time).to_string()
}

/// Render the banner for `kind` stamped with `generated`.
///
/// The banner is a block comment followed by one blank line, so the text
/// after it starts at the first byte of the wrapped content.
pub fn render_banner(kind: BannerKind, generated: &str) -> String {
  kind.template().replace("{generated}", generated)
}

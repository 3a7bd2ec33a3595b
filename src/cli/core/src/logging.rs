/* src/cli/core/src/logging.rs */

use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] =
  &["craft", "craft_app", "craft_calendar", "craft_i18n", "craft_markup", "craft_router"];

/// Map `-v` repeats to a level: none -> warn, `-v` -> info, `-vv` -> debug,
/// more -> trace. `RUST_LOG` overrides the flag when set.
pub fn init(verbosity: u8) {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn default_directives(verbosity: u8) -> String {
  let level = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };
  CRATE_TARGETS.iter().map(|t| format!("{t}={level}")).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn verbosity_maps_to_levels() {
    assert!(default_directives(0).starts_with("craft=warn,"));
    assert!(default_directives(1).contains("craft_router=info"));
    assert!(default_directives(2).contains("craft_calendar=debug"));
    assert!(default_directives(7).ends_with("craft_router=trace"));
  }
}

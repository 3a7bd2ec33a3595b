/* src/app/rust/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::CraftConfig;

pub const CONFIG_FILE_NAME: &str = "craft.toml";

/// Walk upward from `start` to find `craft.toml`, like Cargo.toml discovery
pub fn find_craft_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE_NAME} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_craft_config(path: &Path) -> Result<CraftConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: CraftConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  if config.router.history_keep > config.router.history_limit {
    bail!(
      "router.history_keep ({}) must not exceed router.history_limit ({})",
      config.router.history_keep,
      config.router.history_limit
    );
  }
  Ok(config)
}

/// Explicit path if given, else upward discovery from `cwd`; defaults when
/// nothing is found. A file that exists but fails to parse is an error.
pub fn load_or_default(explicit: Option<&Path>, cwd: &Path) -> Result<(Option<PathBuf>, CraftConfig)> {
  let path = match explicit {
    Some(p) => p.to_path_buf(),
    None => match find_craft_config(cwd) {
      Ok(p) => p,
      Err(err) => {
        debug!(%err, "using default configuration");
        return Ok((None, CraftConfig::default()));
      }
    },
  };
  let config = load_craft_config(&path)?;
  Ok((Some(path), config))
}

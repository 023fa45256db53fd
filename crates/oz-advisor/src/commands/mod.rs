pub mod config;
pub mod ideas;
pub mod tooltip;

use anyhow::{Context, Result};
use oz_core::AdvisorConfig;

/// Explicit path wins; otherwise the usual search locations, then defaults.
pub fn load_config(path: Option<&str>) -> Result<AdvisorConfig> {
  match path {
    Some(path) => {
      tracing::debug!(path, "using configuration file from --config");
      AdvisorConfig::load_from_file(path)
        .with_context(|| format!("Failed to load configuration from {path}"))
    }
    None => {
      tracing::debug!("searching default configuration locations");
      AdvisorConfig::load().context("Failed to load configuration")
    }
  }
}

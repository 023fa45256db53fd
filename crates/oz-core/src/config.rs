//! Configuration management for the advisor
//!
//! Selects the idea service implementation and holds the tooltip offsets.
//! Every field has a default, so a missing or partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
  #[serde(default)]
  pub fetcher: FetcherConfig,
  #[serde(default)]
  pub tooltip: TooltipConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetcherKind {
  /// Built-in ideas after a fixed delay
  #[default]
  Canned,
  /// Remote idea service over HTTP
  Http,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetcherConfig {
  #[serde(default)]
  pub kind: FetcherKind,
  /// Idea service URL, required for `http`
  #[serde(default)]
  pub endpoint: Option<String>,
  /// Simulated latency of the canned fetcher
  #[serde(default = "default_delay_ms")]
  pub delay_ms: u64,
  /// Request timeout of the HTTP fetcher
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
  /// Gap between the icon and the tooltip, above or below
  #[serde(default = "default_vertical_offset")]
  pub vertical_offset: f64,
  /// Minimum distance kept from the viewport's left and right edges
  #[serde(default = "default_edge_margin")]
  pub edge_margin: f64,
  /// Class that marks an element as an info icon
  #[serde(default = "default_marker_class")]
  pub marker_class: String,
}

fn default_delay_ms() -> u64 {
  1000
}
fn default_timeout_secs() -> u64 {
  30
}
fn default_vertical_offset() -> f64 {
  5.0
}
fn default_edge_margin() -> f64 {
  10.0
}
fn default_marker_class() -> String {
  "info-icon".to_string()
}

impl Default for FetcherConfig {
  fn default() -> Self {
    Self {
      kind: FetcherKind::default(),
      endpoint: None,
      delay_ms: default_delay_ms(),
      timeout_secs: default_timeout_secs(),
    }
  }
}

impl Default for TooltipConfig {
  fn default() -> Self {
    Self {
      vertical_offset: default_vertical_offset(),
      edge_margin: default_edge_margin(),
      marker_class: default_marker_class(),
    }
  }
}

impl FetcherConfig {
  /// Parsed endpoint; errors when `http` is selected without a usable URL.
  pub fn endpoint_url(&self) -> Result<url::Url, ConfigError> {
    let endpoint = self.endpoint.as_deref().ok_or(ConfigError::MissingEndpoint)?;
    let parsed = url::Url::parse(endpoint).map_err(|e| ConfigError::InvalidEndpoint {
      endpoint: endpoint.to_string(),
      reason: e.to_string(),
    })?;

    match parsed.scheme() {
      "http" | "https" => Ok(parsed),
      other => Err(ConfigError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: format!("unsupported scheme '{other}'"),
      }),
    }
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    match self.kind {
      FetcherKind::Canned => Ok(()),
      FetcherKind::Http => self.endpoint_url().map(|_| ()),
    }
  }
}

impl AdvisorConfig {
  /// Load configuration from a file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: AdvisorConfig = serde_json::from_str(&content)?;
    config.fetcher.validate()?;
    Ok(config)
  }

  /// Load configuration from the working directory, the user config dir, or defaults
  pub fn load() -> Result<Self, ConfigError> {
    match Self::candidate_paths().into_iter().find(|path| path.exists()) {
      Some(path) => {
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::load_from_file(path)
      }
      None => Ok(AdvisorConfig::default()),
    }
  }

  /// Search order used by [`AdvisorConfig::load`]
  #[cfg(not(tarpaulin_include))] // Skip coverage - depends on the user's config directory
  pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".oz-advisor.json"), PathBuf::from("oz-advisor.json")];
    if let Some(config_dir) = dirs::config_dir() {
      paths.push(config_dir.join("oz-advisor").join("config.json"));
    }
    paths
  }

  /// Save configuration to a file
  pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
    let content = serde_json::to_string_pretty(self)?;
    std::fs::write(path, content)?;
    Ok(())
  }
}

use anyhow::{Context, Result};
use oz_core::AdvisorConfig;

use crate::display;

pub fn handle(config: &AdvisorConfig, save: Option<String>) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(config)?);

  if let Some(path) = save {
    config.save_to_file(&path).with_context(|| format!("Failed to save configuration to {path}"))?;
    display::success(&format!("Configuration saved to {path}"));
  }

  Ok(())
}
